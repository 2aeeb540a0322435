//! Core list logic split into modular submodules.

/// Filter-set transitions.
pub mod filter;
/// Query ids and page request dispatch.
pub mod query;
/// The pure list reducer.
pub mod reducer;
/// Layout-keyed render selection.
pub mod render;
/// Sort-specification transitions.
pub mod sort;

// Re-export public APIs to keep short import paths (crate::logic::...)
pub use query::{QueryTracker, send_query};
pub use reducer::{Action, reduce};
pub use render::{RenderFn, Renderers};
pub use sort::Direction;
