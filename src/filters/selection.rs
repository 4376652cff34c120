use std::collections::BTreeMap;
use tracing::warn;

use crate::config::filter_groups::{self, is_sentinel, GroupKey, SelectionMode};

/// Current selection for every filter group.
///
/// Selection order within a group is preserved for display; it carries no
/// filtering semantics. Mutation goes through `toggle` only, which keeps
/// the per-group invariants intact: single-mode groups always hold exactly
/// one option, and no selection ever mixes a sentinel with regular options.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelectionStore {
    selection: BTreeMap<GroupKey, Vec<String>>,
}

impl Default for FilterSelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSelectionStore {
    /// Seed every group from its registry default.
    pub fn new() -> Self {
        let selection = filter_groups::FILTER_GROUPS
            .iter()
            .map(|g| {
                let defaults = g.default_selection.iter().map(|s| s.to_string()).collect();
                (g.key, defaults)
            })
            .collect();
        Self { selection }
    }

    pub fn selected(&self, key: GroupKey) -> &[String] {
        self.selection.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, key: GroupKey, option: &str) -> bool {
        self.selected(key).iter().any(|o| o == option)
    }

    pub fn snapshot(&self) -> &BTreeMap<GroupKey, Vec<String>> {
        &self.selection
    }

    /// Apply one click on a filter option. Returns true when the selection
    /// changed, so the caller knows to rebuild the query and refetch.
    pub fn toggle(&mut self, key: GroupKey, option: &str) -> bool {
        let group = filter_groups::group(key);
        if !group.options.contains(&option) {
            warn!(
                target: "filters",
                "ignoring unknown option {:?} for group {}", option, key
            );
            return false;
        }

        let current = self.selection.entry(key).or_default();
        let next = match group.mode {
            // Radio semantics: clicking the selected option keeps it.
            SelectionMode::Single => vec![option.to_string()],
            SelectionMode::Multi => {
                if is_sentinel(option) {
                    vec![option.to_string()]
                } else {
                    let mut next: Vec<String> = current
                        .iter()
                        .filter(|o| !is_sentinel(o))
                        .cloned()
                        .collect();
                    if let Some(pos) = next.iter().position(|o| o == option) {
                        next.remove(pos);
                    } else {
                        next.push(option.to_string());
                    }
                    // Only the universe group refuses to go empty; other
                    // multi groups accept an empty selection (disabled).
                    if next.is_empty() && key == GroupKey::Universe {
                        vec!["ALL".to_string()]
                    } else {
                        next
                    }
                }
            }
        };

        if *current == next {
            return false;
        }
        *current = next;
        true
    }
}
