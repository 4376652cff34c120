use super::manager::ColumnLayoutManager;
use super::store::LayoutStore;

/// Tracks the in-flight header drag and hands the drop to the layout
/// manager.
#[derive(Debug, Clone, Default)]
pub struct DragReorderController {
    dragged: Option<String>,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_start(&mut self, key: &str) {
        self.dragged = Some(key.to_string());
    }

    pub fn dragged(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    /// Complete the drag onto `target`. Returns true when the drop
    /// changed the order; dropping with no drag in flight or onto the
    /// dragged column itself is a no-op.
    pub fn drop_on<S: LayoutStore>(
        &mut self,
        target: &str,
        layout: &mut ColumnLayoutManager<S>,
    ) -> bool {
        match self.dragged.take() {
            Some(dragged) if dragged != target => layout.reorder(&dragged, target),
            _ => false,
        }
    }

    pub fn drag_end(&mut self) {
        self.dragged = None;
    }
}
