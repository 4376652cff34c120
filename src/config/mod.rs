//! Configuration module
//!
//! Static catalogs (filter groups, columns) plus the user-editable
//! settings file.

pub mod columns;
pub mod config;
pub mod filter_groups;

pub use columns::{ColumnDef, COLUMN_CATALOG};
pub use config::Config;
pub use filter_groups::{FilterGroup, GroupKey, SelectionMode, FILTER_GROUPS};
