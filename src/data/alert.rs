use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One alert from the scanner feed, keyed by column key.
///
/// Field values arrive as untyped scan output (strings, some with
/// trailing `%` or currency marks). Everything is kept in string form and
/// coerced lazily when filtering or sorting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRow {
    fields: HashMap<String, String>,
}

impl AlertRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a row from an arbitrary JSON object. Non-object payloads
    /// produce an empty row rather than an error.
    pub fn from_json(value: &JsonValue) -> Self {
        let mut fields = HashMap::new();
        if let Some(obj) = value.as_object() {
            for (key, v) in obj {
                fields.insert(key.clone(), json_to_string(v));
            }
        }
        Self { fields }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Missing fields read as the empty string.
    pub fn field(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'de> Deserialize<'de> for AlertRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        Ok(AlertRow::from_json(&value))
    }
}

fn json_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

/// Coerced view of a raw cell: numeric when the string parses as a
/// number, text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Coercion used by the sort comparator: percent strings compare by
    /// their numeric part, plain numerics by value, everything else as text.
    pub fn for_sort(raw: &str) -> Self {
        if raw.contains('%') {
            if let Ok(n) = raw.replace('%', "").trim().parse::<f64>() {
                return CellValue::Number(n);
            }
        }
        if let Ok(n) = raw.trim().parse::<f64>() {
            return CellValue::Number(n);
        }
        CellValue::Text(raw.to_string())
    }

    /// Numeric reading used by the `>`/`<` column filters: strips percent,
    /// currency, and thousands marks before parsing.
    pub fn filter_number(raw: &str) -> Option<f64> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '%' | '$' | ','))
            .collect();
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<f64>().ok()
    }
}

/// Total order over coerced cells. Numbers compare numerically, text
/// lexicographically, and numbers sort before text in mixed columns.
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Number(a), CellValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_sort_strips_percent() {
        assert_eq!(CellValue::for_sort("3.2%"), CellValue::Number(3.2));
        assert_eq!(CellValue::for_sort("-1.0%"), CellValue::Number(-1.0));
    }

    #[test]
    fn test_for_sort_plain_number() {
        assert_eq!(CellValue::for_sort("42"), CellValue::Number(42.0));
    }

    #[test]
    fn test_for_sort_text_fallback() {
        assert_eq!(
            CellValue::for_sort("HAMMER"),
            CellValue::Text("HAMMER".to_string())
        );
        // Unparseable percent strings fall back to text too.
        assert_eq!(
            CellValue::for_sort("n/a%"),
            CellValue::Text("n/a%".to_string())
        );
    }

    #[test]
    fn test_filter_number_strips_marks() {
        assert_eq!(CellValue::filter_number("$1,234.50"), Some(1234.5));
        assert_eq!(CellValue::filter_number("3.2%"), Some(3.2));
        assert_eq!(CellValue::filter_number("abc"), None);
        assert_eq!(CellValue::filter_number(""), None);
    }

    #[test]
    fn test_compare_numbers_before_text() {
        let n = CellValue::Number(1.0);
        let t = CellValue::Text("a".to_string());
        assert_eq!(compare_cells(&n, &t), Ordering::Less);
        assert_eq!(compare_cells(&t, &n), Ordering::Greater);
    }

    #[test]
    fn test_row_from_json() {
        let value: serde_json::Value =
            serde_json::json!({"ticker": "SPY", "price": 512.3, "gap": "1.1%", "halted": false, "note": null});
        let row = AlertRow::from_json(&value);
        assert_eq!(row.field("ticker"), "SPY");
        assert_eq!(row.field("price"), "512.3");
        assert_eq!(row.field("gap"), "1.1%");
        assert_eq!(row.field("halted"), "false");
        assert_eq!(row.field("note"), "");
        assert_eq!(row.field("missing"), "");
    }
}
