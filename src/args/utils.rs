//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `configured`: Level from settings.conf, if any.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides everything; an explicit `--log-level` other than the
///   default wins over the settings file.
pub fn determine_log_level(args: &crate::args::Args, configured: Option<&str>) -> String {
    if args.verbose {
        "debug".to_string()
    } else if args.log_level != "info" {
        args.log_level.clone()
    } else {
        configured.unwrap_or("info").to_string()
    }
}
