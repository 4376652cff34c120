//! Column layout: user-controlled order and visibility, drag reordering,
//! and persistence across sessions.

pub mod drag;
pub mod manager;
pub mod store;

pub use drag::DragReorderController;
pub use manager::ColumnLayoutManager;
pub use store::{FileLayoutStore, LayoutStore, MemoryLayoutStore};
