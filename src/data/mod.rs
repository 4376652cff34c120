//! Data layer: alert rows and the filter/sort pipeline that derives the
//! displayed row set from them.

pub mod alert;
pub mod pipeline;

pub use alert::{AlertRow, CellValue};
pub use pipeline::{AlertView, ColumnFilterMap, SortDirection, SortSpec};
