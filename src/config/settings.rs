use std::fs;
use std::path::Path;

use super::parsing::{parse_bool, strip_inline_comment};
use super::paths::resolve_settings_config_path;
use crate::state::{DEFAULT_LAYOUT, DEFAULT_LIMIT};

/// User-configurable defaults for listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Page size.
    pub page_size: usize,
    /// Layout key used when none is given on the command line.
    pub default_layout: String,
    /// List archived variables by default.
    pub show_inactive: bool,
    /// Log level when neither `--log-level` nor `--verbose` is given.
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_LIMIT,
            default_layout: DEFAULT_LAYOUT.to_string(),
            show_inactive: false,
            log_level: None,
        }
    }
}

/// What: Parse settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys normalize to `_`.
/// - Unknown keys are ignored; malformed values keep the previous value.
/// - A page size of 0 is rejected.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "page_size" | "limit" => {
                if let Ok(v) = val.parse::<usize>()
                    && v > 0
                {
                    settings.page_size = v;
                }
            }
            "default_layout" | "layout" => {
                if !val.is_empty() {
                    settings.default_layout = val.to_string();
                }
            }
            "show_inactive" | "archived" => {
                settings.show_inactive = parse_bool(val);
            }
            "log_level" => {
                let lv = val.to_ascii_lowercase();
                if matches!(lv.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
                    settings.log_level = Some(lv);
                }
            }
            _ => {}
        }
    }
}

/// What: Load settings from an explicit file.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            parse_settings(&content, &mut out);
            tracing::debug!(path = %path.display(), "loaded settings");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
        }
    }
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing.
#[must_use]
pub fn settings() -> Settings {
    resolve_settings_config_path().map_or_else(Settings::default, |p| load_settings_from(&p))
}
