use std::collections::HashMap;
use std::sync::Arc;

use super::alert::{compare_cells, AlertRow, CellValue};

/// Per-column filter text keyed by column key. Transient UI state, never
/// persisted. Blank text clears the column's filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnFilterMap {
    filters: HashMap<String, String>,
}

impl ColumnFilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, text: &str) {
        if text.trim().is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), text.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Which column the grid is sorted by, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: Some("gap".to_string()),
            direction: SortDirection::Descending,
        }
    }
}

impl SortSpec {
    pub fn none() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }

    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction,
        }
    }

    /// Header-click rule: a second request on the currently ascending
    /// column flips it to descending; any other column starts ascending.
    pub fn request(&mut self, key: &str) {
        let direction =
            if self.key.as_deref() == Some(key) && self.direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        self.key = Some(key.to_string());
        self.direction = direction;
    }
}

/// A view over a fetched alert set that applies per-column filters and a
/// single-key sort without modifying the underlying rows.
///
/// Recomputing from the same inputs always yields the same view; the
/// source vector is shared, never copied or reordered.
#[derive(Debug, Clone)]
pub struct AlertView {
    source: Arc<Vec<AlertRow>>,
    visible: Vec<usize>,
}

impl AlertView {
    /// Create a view showing every row in source order.
    pub fn new(source: Arc<Vec<AlertRow>>) -> Self {
        let row_count = source.len();
        Self {
            source,
            visible: (0..row_count).collect(),
        }
    }

    /// Run the full two-stage pipeline: column filters, then sort.
    pub fn process(source: Arc<Vec<AlertRow>>, filters: &ColumnFilterMap, sort: &SortSpec) -> Self {
        let mut view = Self::new(source);
        view.apply_column_filters(filters);
        view.apply_sort(sort);
        view
    }

    /// Narrow the visible set with every active column filter (AND).
    pub fn apply_column_filters(&mut self, filters: &ColumnFilterMap) {
        for (key, text) in filters.active() {
            let source = &self.source;
            self.visible
                .retain(|&idx| field_matches(source[idx].field(key), text));
        }
    }

    /// Sort the visible set by the directive's column, if one is set.
    /// `sort_by` is stable, so rows that compare equal keep their
    /// relative order.
    pub fn apply_sort(&mut self, sort: &SortSpec) {
        let Some(key) = sort.key.as_deref() else {
            return;
        };
        let source = &self.source;
        self.visible.sort_by(|&a, &b| {
            let va = CellValue::for_sort(source[a].field(key));
            let vb = CellValue::for_sort(source[b].field(key));
            let cmp = compare_cells(&va, &vb);
            match sort.direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        });
    }

    pub fn row_count(&self) -> usize {
        self.visible.len()
    }

    pub fn get_row(&self, index: usize) -> Option<&AlertRow> {
        let row_idx = *self.visible.get(index)?;
        self.source.get(row_idx)
    }

    /// The display-ready row sequence.
    pub fn rows(&self) -> Vec<&AlertRow> {
        self.visible
            .iter()
            .filter_map(|&idx| self.source.get(idx))
            .collect()
    }

    pub fn source(&self) -> &[AlertRow] {
        &self.source
    }
}

/// Predicate for one column filter.
///
/// `>` and `<` prefixes compare numerically and only match when both the
/// operand and the cell parse as numbers; a row whose cell does not parse
/// is excluded by that filter. Anything else is a case-insensitive
/// substring match against the field's string form.
fn field_matches(field: &str, filter: &str) -> bool {
    let filter = filter.trim();

    if let Some(rest) = filter.strip_prefix('>') {
        return match (rest.trim().parse::<f64>(), CellValue::filter_number(field)) {
            (Ok(operand), Some(cell)) => cell > operand,
            _ => false,
        };
    }
    if let Some(rest) = filter.strip_prefix('<') {
        return match (rest.trim().parse::<f64>(), CellValue::filter_number(field)) {
            (Ok(operand), Some(cell)) => cell < operand,
            _ => false,
        };
    }

    field.to_lowercase().contains(&filter.to_lowercase())
}
