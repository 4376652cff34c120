//! Filter-selection state machine and its mapping to query parameters.

pub mod query_params;
pub mod selection;

pub use query_params::build_query_params;
pub use selection::FilterSelectionStore;
