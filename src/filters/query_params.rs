use crate::config::filter_groups::{GroupKey, SelectionMode};

use super::selection::FilterSelectionStore;

/// Map the selection snapshot to the query pairs the alerts endpoint
/// understands, in a fixed group order. Multi selections are joined with
/// commas. The FILTERS group's NONE means "no extra filter" and is not
/// sent at all.
pub fn build_query_params(store: &FilterSelectionStore) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(GroupKey::ALL.len());

    for key in GroupKey::ALL {
        let Some(selected) = store.snapshot().get(&key) else {
            continue;
        };

        let group = crate::config::filter_groups::group(key);
        let value = match group.mode {
            SelectionMode::Single => match selected.first() {
                Some(v) => v.clone(),
                None => continue,
            },
            SelectionMode::Multi => selected.join(","),
        };

        if key == GroupKey::Filters && value == "NONE" {
            continue;
        }

        params.push((key.param_name().to_string(), value));
    }

    params
}
