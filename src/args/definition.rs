//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// varlist - browse the variables of a struct page by page
#[derive(Parser, Debug)]
#[command(name = "varlist")]
#[command(version)]
#[command(about = "Browse the variables of a struct page by page with filters and multi-key sorting", long_about = None)]
pub struct Args {
    /// JSON file holding an array of variables
    #[arg(short, long)]
    pub data: PathBuf,

    /// Struct whose variables are listed
    #[arg(short = 's', long = "struct")]
    pub struct_name: String,

    /// List archived (inactive) variables instead of active ones
    #[arg(long)]
    pub inactive: bool,

    /// Only list variables at this level
    #[arg(long)]
    pub level: Option<u32>,

    /// Sort key, repeatable, in priority order (e.g. --sort name --sort age:desc)
    #[arg(long = "sort", value_name = "FIELD[:asc|:desc]")]
    pub sort: Vec<String>,

    /// Filter predicate, repeatable; all predicates form one group
    /// (FIELD, FIELD=VALUE, FIELD~TEXT, FIELD>=VALUE, FIELD<=VALUE)
    #[arg(long = "filter", value_name = "PREDICATE")]
    pub filter: Vec<String>,

    /// Page size (overrides settings.conf)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Render layout: default, compact, table or json (overrides settings.conf)
    #[arg(long)]
    pub layout: Option<String>,

    /// Maximum number of pages to load (default: all)
    #[arg(short, long)]
    pub pages: Option<usize>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}
