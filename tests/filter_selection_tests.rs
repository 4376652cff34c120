use strat_scanner::config::filter_groups::{GroupKey, SelectionMode, FILTER_GROUPS};
use strat_scanner::filters::FilterSelectionStore;

#[test]
fn test_defaults_match_registry() {
    let store = FilterSelectionStore::new();
    assert_eq!(store.selected(GroupKey::Universe), ["ALL"]);
    assert_eq!(store.selected(GroupKey::Filters), ["NONE"]);
    assert_eq!(store.selected(GroupKey::ActionableSetups), ["ALL"]);
    assert_eq!(store.selected(GroupKey::InForce), ["HTF In-Force"]);
    assert_eq!(store.selected(GroupKey::Ftfc), ["BULLISH"]);
    assert_eq!(store.selected(GroupKey::Timeframe), ["1M"]);
}

#[test]
fn test_single_mode_is_radio() {
    let mut store = FilterSelectionStore::new();

    assert!(store.toggle(GroupKey::Ftfc, "BEARISH"));
    assert_eq!(store.selected(GroupKey::Ftfc), ["BEARISH"]);

    assert!(store.toggle(GroupKey::Ftfc, "TTO"));
    assert_eq!(store.selected(GroupKey::Ftfc), ["TTO"]);

    // Clicking the selected option keeps it; there is no deselect.
    assert!(!store.toggle(GroupKey::Ftfc, "TTO"));
    assert_eq!(store.selected(GroupKey::Ftfc), ["TTO"]);
}

#[test]
fn test_single_mode_selection_is_always_singleton() {
    let mut store = FilterSelectionStore::new();
    let clicks = ["STRONG RS", "NONE", "WEAK RS", "WEAK RS", "LIQUID LEADERS"];
    for option in clicks {
        store.toggle(GroupKey::Filters, option);
        assert_eq!(store.selected(GroupKey::Filters).len(), 1);
    }
}

#[test]
fn test_multi_toggle_adds_and_removes() {
    let mut store = FilterSelectionStore::new();

    // First regular option replaces the ALL sentinel.
    assert!(store.toggle(GroupKey::ActionableSetups, "HAMMER"));
    assert_eq!(store.selected(GroupKey::ActionableSetups), ["HAMMER"]);

    assert!(store.toggle(GroupKey::ActionableSetups, "INSIDE"));
    assert_eq!(
        store.selected(GroupKey::ActionableSetups),
        ["HAMMER", "INSIDE"]
    );

    assert!(store.toggle(GroupKey::ActionableSetups, "HAMMER"));
    assert_eq!(store.selected(GroupKey::ActionableSetups), ["INSIDE"]);
}

#[test]
fn test_sentinel_resets_to_singleton() {
    let mut store = FilterSelectionStore::new();
    store.toggle(GroupKey::Universe, "SPY");
    store.toggle(GroupKey::Universe, "QQQ");
    assert_eq!(store.selected(GroupKey::Universe), ["SPY", "QQQ"]);

    store.toggle(GroupKey::Universe, "ALL");
    assert_eq!(store.selected(GroupKey::Universe), ["ALL"]);
}

#[test]
fn test_universe_falls_back_to_all_when_emptied() {
    let mut store = FilterSelectionStore::new();
    store.toggle(GroupKey::Universe, "SPY");
    assert_eq!(store.selected(GroupKey::Universe), ["SPY"]);

    // Removing the last universe option recovers ALL, never empty.
    store.toggle(GroupKey::Universe, "SPY");
    assert_eq!(store.selected(GroupKey::Universe), ["ALL"]);
}

#[test]
fn test_other_multi_groups_may_go_empty() {
    let mut store = FilterSelectionStore::new();

    store.toggle(GroupKey::ActionableSetups, "HAMMER");
    store.toggle(GroupKey::ActionableSetups, "HAMMER");
    assert!(store.selected(GroupKey::ActionableSetups).is_empty());

    // IN_FORCE defaults to a regular option, so one click empties it.
    store.toggle(GroupKey::InForce, "HTF In-Force");
    assert!(store.selected(GroupKey::InForce).is_empty());
}

#[test]
fn test_in_force_none_behaves_as_regular_option() {
    let mut store = FilterSelectionStore::new();
    store.toggle(GroupKey::InForce, "None");
    assert_eq!(store.selected(GroupKey::InForce), ["HTF In-Force", "None"]);
}

#[test]
fn test_unknown_option_is_rejected() {
    let mut store = FilterSelectionStore::new();
    assert!(!store.toggle(GroupKey::Universe, "NASDAQ"));
    assert_eq!(store.selected(GroupKey::Universe), ["ALL"]);
}

#[test]
fn test_no_selection_mixes_sentinel_with_options() {
    let mut store = FilterSelectionStore::new();
    let mut clicks = Vec::new();
    for g in &FILTER_GROUPS {
        if g.mode == SelectionMode::Multi {
            for option in g.options {
                clicks.push((g.key, *option));
            }
        }
    }
    for (key, option) in clicks {
        store.toggle(key, option);
        let selected = store.selected(key);
        let has_sentinel = selected.iter().any(|o| o == "ALL" || o == "NONE");
        if has_sentinel {
            assert_eq!(selected.len(), 1, "sentinel co-selected in {key}");
        }
    }
}
