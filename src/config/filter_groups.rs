use std::fmt;

/// Identifier for one of the six filter facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Universe,
    Filters,
    ActionableSetups,
    InForce,
    Ftfc,
    Timeframe,
}

impl GroupKey {
    /// All groups in display order.
    pub const ALL: [GroupKey; 6] = [
        GroupKey::Universe,
        GroupKey::Filters,
        GroupKey::ActionableSetups,
        GroupKey::InForce,
        GroupKey::Ftfc,
        GroupKey::Timeframe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKey::Universe => "UNIVERSE",
            GroupKey::Filters => "FILTERS",
            GroupKey::ActionableSetups => "ACTIONABLE_SETUPS",
            GroupKey::InForce => "IN_FORCE",
            GroupKey::Ftfc => "FTFC",
            GroupKey::Timeframe => "TIMEFRAME",
        }
    }

    /// Query-string parameter name the alerts endpoint expects.
    pub fn param_name(&self) -> &'static str {
        match self {
            GroupKey::Universe => "universe",
            GroupKey::Filters => "filters",
            GroupKey::ActionableSetups => "setups",
            GroupKey::InForce => "in_force",
            GroupKey::Ftfc => "ftfc",
            GroupKey::Timeframe => "timeframe",
        }
    }

    pub fn parse(s: &str) -> Option<GroupKey> {
        GroupKey::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Selection semantics for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Radio semantics: exactly one option selected, no deselect.
    Single,
    /// Checkbox semantics with sentinel handling.
    Multi,
}

/// Static description of one filter group.
#[derive(Debug, Clone, Copy)]
pub struct FilterGroup {
    pub key: GroupKey,
    pub title: &'static str,
    pub mode: SelectionMode,
    pub options: &'static [&'static str],
    pub default_selection: &'static [&'static str],
}

/// Selecting a sentinel clears everything else in the group. Exact match
/// only: the IN_FORCE option "None" is a regular option, not a sentinel.
pub fn is_sentinel(option: &str) -> bool {
    option == "ALL" || option == "NONE"
}

pub static FILTER_GROUPS: [FilterGroup; 6] = [
    FilterGroup {
        key: GroupKey::Universe,
        title: "UNIVERSE",
        mode: SelectionMode::Multi,
        options: &[
            "SPY",
            "QQQ",
            "DIA",
            "IWM",
            "SECTORS",
            "IPO",
            "MAJOR ETFS",
            "EQUAL WEIGHT",
            "ALL",
        ],
        default_selection: &["ALL"],
    },
    FilterGroup {
        key: GroupKey::Filters,
        title: "FILTERS",
        mode: SelectionMode::Single,
        options: &["LIQUID LEADERS", "STRONG RS", "WEAK RS", "NONE"],
        default_selection: &["NONE"],
    },
    FilterGroup {
        key: GroupKey::ActionableSetups,
        title: "ACTIONABLE SETUPS",
        mode: SelectionMode::Multi,
        options: &["2dG", "2uR", "HAMMER", "SHOOTER", "INSIDE", "ALL"],
        default_selection: &["ALL"],
    },
    FilterGroup {
        key: GroupKey::InForce,
        title: "IN FORCE",
        mode: SelectionMode::Multi,
        options: &[
            "1-2u",
            "1-2d",
            "2d-2u",
            "2u-2d",
            "3-2u",
            "3-2d",
            "Bullish",
            "Bearish",
            "HTF In-Force",
            "None",
        ],
        default_selection: &["HTF In-Force"],
    },
    FilterGroup {
        key: GroupKey::Ftfc,
        title: "FTFC",
        mode: SelectionMode::Single,
        options: &["BULLISH", "BEARISH", "TTO", "NO FTFC"],
        default_selection: &["BULLISH"],
    },
    FilterGroup {
        key: GroupKey::Timeframe,
        title: "Timeframe",
        mode: SelectionMode::Multi,
        options: &["1D", "2D", "3D", "5D", "1W", "2W", "3W", "1M", "1Q", "1Y"],
        default_selection: &["1M"],
    },
];

/// Look up a group's static definition.
pub fn group(key: GroupKey) -> &'static FilterGroup {
    FILTER_GROUPS
        .iter()
        .find(|g| g.key == key)
        .expect("every GroupKey has a registry entry")
}
