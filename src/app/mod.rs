//! varlist application module: the list controller and the command-line runtime.

/// Mounted list: reducer state plus the fetch effect.
pub mod controller;
/// Built-in text layouts.
pub mod layouts;
/// Command-line flow.
mod runtime;
/// Background fetch worker.
mod worker;

pub use controller::{ListController, ResultOutcome};
pub use runtime::{build_config, run};
