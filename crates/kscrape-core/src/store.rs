//! Store-locator rows and their flattening into a rectangular table.

use serde_json::{Map, Value};

/// One store as returned by the locator API, keys in upstream order.
pub type StoreRecord = Map<String, Value>;

/// Store records laid out as CSV: the header is the union of keys across
/// all records in first-seen order, and each row has one cell per header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StoreTable {
    #[must_use]
    pub fn from_records(records: &[StoreRecord]) -> Self {
        let mut header: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !header.iter().any(|h| h == key) {
                    header.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                header
                    .iter()
                    .map(|key| record.get(key).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { header, rows }
    }
}

/// Renders one JSON value as a CSV cell.
///
/// Strings go out verbatim, `null` is empty, scalars use their JSON text
/// and nested values are compact JSON.
#[must_use]
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> StoreRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn header_is_union_in_first_seen_order() {
        let records = vec![
            record(json!({"s_name": "광화문", "lat": "37.57"})),
            record(json!({"s_name": "서면", "sido_code": "07", "lat": "35.15"})),
        ];
        let table = StoreTable::from_records(&records);
        assert_eq!(table.header, vec!["s_name", "lat", "sido_code"]);
        assert_eq!(table.rows[0], vec!["광화문", "37.57", ""]);
        assert_eq!(table.rows[1], vec!["서면", "35.15", "07"]);
    }

    #[test]
    fn cells_render_scalars_and_nested_values() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(126.97865)), "126.97865");
        assert_eq!(cell_text(&json!("드라이브스루")), "드라이브스루");
        assert_eq!(cell_text(&json!(["T03", "P10"])), r#"["T03","P10"]"#);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = StoreTable::from_records(&[]);
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
    }
}
