use std::sync::Arc;

use crate::args::{Args, parse_filter_arg, parse_sort_arg};
use crate::config::Settings;
use crate::logic::Action;
use crate::sources::MemorySource;
use crate::state::{DEFAULT_LAYOUT, Filter, FilterPath, ListConfig, SortOrdering, StructRef};

use super::controller::{ListController, ResultOutcome};
use super::layouts::text_renderers;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Build the mount configuration from command-line arguments and settings.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Loaded user settings
///
/// Output:
/// - Configuration with the sort specification and filter group seeded, so mounting
///   issues a single page-0 request.
///
/// Details:
/// - Command-line values win over settings; a zero limit is raised to 1.
/// - Sort keys get priorities 1, 2, ... in argument order.
/// - All filter predicates go into one filter group with index 0.
///
/// # Errors
/// Returns an error when a sort key or filter predicate cannot be parsed, or when a
/// field is sorted on twice.
pub fn build_config(args: &Args, settings: &Settings) -> Result<ListConfig> {
    let mut config = ListConfig::new(StructRef::new(args.struct_name.clone()));
    config.active = !(args.inactive || settings.show_inactive);
    config.level = args.level;
    config.limit = args.limit.unwrap_or(settings.page_size).max(1);
    config.layout = args
        .layout
        .clone()
        .unwrap_or_else(|| settings.default_layout.clone());

    for (priority, raw) in (1u32..).zip(&args.sort) {
        let (path, ascending) = parse_sort_arg(raw)?;
        if config.init_filter.path_entry(&path).is_some() {
            return Err(format!("field '{path}' is sorted on twice").into());
        }
        let entry = FilterPath::new(path).with_ordering(Some(SortOrdering {
            priority,
            ascending,
        }));
        config.init_filter.filter_paths.insert(entry);
    }

    if !args.filter.is_empty() {
        let mut group = Filter::default();
        for raw in &args.filter {
            let path = parse_filter_arg(raw)?;
            group.filter_paths.remove_where(|p| p.path == path.path);
            group.filter_paths.insert(path);
        }
        config.filters.insert(group);
    }
    Ok(config)
}

/// What: Run the command-line front-end: mount, page, print.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Loaded user settings
///
/// Output:
/// - `Ok(())` after printing the loaded variables; `Err` on unreadable data or bad arguments.
///
/// Details:
/// - Loads pages until the end of data or `--pages` pages.
/// - A failed page stops paging; what was loaded so far is still printed.
///
/// # Errors
/// Returns an error when the data file cannot be loaded or arguments are malformed.
pub async fn run(args: &Args, settings: &Settings) -> Result<()> {
    let source = MemorySource::from_json_file(&args.data)?;
    let config = build_config(args, settings)?;
    let renderers = text_renderers();
    if config.layout != DEFAULT_LAYOUT && !renderers.layouts().contains(&config.layout.as_str()) {
        tracing::warn!(
            layout = %config.layout,
            available = ?renderers.layouts(),
            "unknown layout; using the default renderer"
        );
    }
    let mut ctl = ListController::mount(config, Arc::new(source));

    let max_pages = args.pages.unwrap_or(usize::MAX);
    let mut pages = 0usize;
    loop {
        match ctl.settle().await {
            Some(ResultOutcome::Committed { .. }) => pages += 1,
            Some(ResultOutcome::Failed) => {
                tracing::warn!(offset = ctl.state().offset, "stopping after failed page");
                break;
            }
            Some(ResultOutcome::Stale) => {}
            None => return Err("fetch worker stopped unexpectedly".into()),
        }
        if ctl.state().reached_end || pages >= max_pages {
            break;
        }
        if ctl.dispatch(Action::AdvanceOffset).is_none() {
            break;
        }
    }

    let st = ctl.state();
    for line in renderers.render_all(st) {
        println!("{line}");
    }
    tracing::info!(
        count = st.variables.len(),
        pages,
        reached_end = st.reached_end,
        "listing finished"
    );
    Ok(())
}
