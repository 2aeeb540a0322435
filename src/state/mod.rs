//! List state and the value types it is built from.

pub mod list_state;
pub mod types;
pub mod value_set;

// Public re-exports so callers can use `crate::state::*`
pub use list_state::{DEFAULT_LAYOUT, DEFAULT_LIMIT, ListConfig, ListState, QueryKey};
pub use types::{
    DateRange, FieldPath, Filter, FilterPath, PathOp, Predicate, SortOrdering, StructRef,
    Variable,
};
pub use value_set::ValueSet;
