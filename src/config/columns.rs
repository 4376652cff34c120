/// Static column definition. Width is a character hint for the table
/// renderer, not a hard limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub width: u16,
}

/// Every column the grid can ever show, in the default display order.
/// Keys match the field names of the alerts feed.
pub static COLUMN_CATALOG: [ColumnDef; 19] = [
    ColumnDef { key: "ticker", label: "Ticker", width: 8 },
    ColumnDef { key: "setup", label: "Setup", width: 14 },
    ColumnDef { key: "adr", label: "ADR%", width: 8 },
    ColumnDef { key: "price", label: "Price", width: 10 },
    ColumnDef { key: "industry", label: "Industry", width: 14 },
    ColumnDef { key: "prevCond2", label: "Prev (2)", width: 8 },
    ColumnDef { key: "prevCond1", label: "Prev (1)", width: 8 },
    ColumnDef { key: "currCond", label: "Curr", width: 8 },
    ColumnDef { key: "gap", label: "Gap%", width: 10 },
    ColumnDef { key: "changeFromOpen", label: "Chg Open", width: 10 },
    ColumnDef { key: "wtd", label: "WTD", width: 10 },
    ColumnDef { key: "mtd", label: "MTD", width: 10 },
    ColumnDef { key: "qtd", label: "QTD", width: 10 },
    ColumnDef { key: "ytd", label: "YTD", width: 10 },
    ColumnDef { key: "rs_1d", label: "RS 1D", width: 8 },
    ColumnDef { key: "rs_1w", label: "RS 1W", width: 8 },
    ColumnDef { key: "rs_1m", label: "RS 1M", width: 8 },
    ColumnDef { key: "rs_3m", label: "RS 3M", width: 8 },
    ColumnDef { key: "timeframe", label: "Timeframe", width: 10 },
];

/// Look up a column definition by key.
pub fn column(key: &str) -> Option<&'static ColumnDef> {
    COLUMN_CATALOG.iter().find(|c| c.key == key)
}

pub fn contains(key: &str) -> bool {
    column(key).is_some()
}

/// The catalog's natural key order, used as the default and reset layout.
pub fn default_order() -> Vec<String> {
    COLUMN_CATALOG.iter().map(|c| c.key.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keys_are_unique() {
        let order = default_order();
        let mut deduped = order.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), order.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(column("gap").unwrap().label, "Gap%");
        assert!(column("nope").is_none());
        assert!(contains("ticker"));
    }
}
