use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::columns::{self, ColumnDef};

use super::store::LayoutStore;

/// User-controlled column order and visibility, persisted after every
/// mutation and restored at startup.
pub struct ColumnLayoutManager<S: LayoutStore> {
    store: S,
    order: Vec<String>,
    visible: HashSet<String>,
}

impl<S: LayoutStore> ColumnLayoutManager<S> {
    /// Seed from persisted state when well formed, else catalog defaults.
    /// Each key degrades independently: a corrupt order file does not
    /// discard a valid visibility set.
    pub fn load(store: S) -> Self {
        let order = match store.read_order().and_then(validate_order) {
            Some(order) => order,
            None => {
                debug!(target: "layout", "using catalog column order");
                columns::default_order()
            }
        };
        let visible = match store.read_visible().and_then(validate_visible) {
            Some(visible) => visible.into_iter().collect(),
            None => {
                debug!(target: "layout", "showing all catalog columns");
                columns::default_order().into_iter().collect()
            }
        };
        Self {
            store,
            order,
            visible,
        }
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible.contains(key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Flip a column in or out of the visible set.
    pub fn toggle_visibility(&mut self, key: &str) {
        if !columns::contains(key) {
            warn!(target: "layout", "ignoring visibility toggle for unknown column {:?}", key);
            return;
        }
        if !self.visible.remove(key) {
            self.visible.insert(key.to_string());
        }
        self.persist_visible();
    }

    /// Move `dragged` to `target`'s position, shifting the columns in
    /// between. No-op when the keys match or either is not in the order.
    /// Returns true when the order changed.
    pub fn reorder(&mut self, dragged: &str, target: &str) -> bool {
        if dragged == target {
            return false;
        }
        let Some(dragged_idx) = self.order.iter().position(|k| k == dragged) else {
            return false;
        };
        let Some(target_idx) = self.order.iter().position(|k| k == target) else {
            return false;
        };

        let col = self.order.remove(dragged_idx);
        self.order.insert(target_idx, col);
        self.persist_order();
        true
    }

    /// Restore the catalog's natural order with all columns visible and
    /// drop persisted state, so a fresh load reproduces the defaults.
    pub fn reset(&mut self) {
        self.order = columns::default_order();
        self.visible = self.order.iter().cloned().collect();
        if let Err(e) = self.store.clear() {
            warn!(target: "layout", "failed to clear persisted layout: {e:#}");
        }
    }

    /// The columns to render, in display order, joined with their static
    /// definitions. Keys that fell out of the catalog are dropped.
    pub fn visible_ordered_columns(&self) -> Vec<&'static ColumnDef> {
        self.order
            .iter()
            .filter(|key| self.visible.contains(key.as_str()))
            .filter_map(|key| columns::column(key))
            .collect()
    }

    fn persist_order(&mut self) {
        if let Err(e) = self.store.write_order(&self.order) {
            warn!(target: "layout", "failed to persist column order: {e:#}");
        }
    }

    fn persist_visible(&mut self) {
        let mut visible: Vec<String> = self.visible.iter().cloned().collect();
        visible.sort();
        if let Err(e) = self.store.write_visible(&visible) {
            warn!(target: "layout", "failed to persist visible columns: {e:#}");
        }
    }
}

fn validate_order(order: Vec<String>) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    for key in &order {
        if !columns::contains(key) {
            warn!(target: "layout", "persisted order names unknown column {:?}, using defaults", key);
            return None;
        }
        if !seen.insert(key.as_str()) {
            warn!(target: "layout", "persisted order repeats column {:?}, using defaults", key);
            return None;
        }
    }
    Some(order)
}

fn validate_visible(visible: Vec<String>) -> Option<Vec<String>> {
    for key in &visible {
        if !columns::contains(key) {
            warn!(target: "layout", "persisted visibility names unknown column {:?}, using defaults", key);
            return None;
        }
    }
    Some(visible)
}
