//! Command-line argument parsing and handling.

pub mod definition;
pub mod parse;
pub mod utils;

// Re-export commonly used items
pub use definition::Args;
pub use parse::{parse_filter_arg, parse_sort_arg};
pub use utils::determine_log_level;
