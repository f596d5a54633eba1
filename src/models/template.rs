use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A HubDB row. Only `values` matters to the relay.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateRow {
    #[serde(default)]
    pub values: TemplateValues,
}

/// Text columns accept plain strings or select options (`{"name": ..}`);
/// any other column type reads as absent instead of failing the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateValues {
    #[serde(default, deserialize_with = "text_column")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_column")]
    pub name: Option<String>,
    /// A string with `${name}`-style tokens for templated rows, or an
    /// arbitrary flex container for raw rows.
    pub content: Option<Value>,
    /// Acknowledgment page body (HTML fragment).
    #[serde(default, deserialize_with = "text_column")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "text_column")]
    pub confirm_label: Option<String>,
    #[serde(default, deserialize_with = "text_column")]
    pub reschedule_label: Option<String>,
    #[serde(default, deserialize_with = "text_column")]
    pub cancel_label: Option<String>,
}

fn text_column<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Object(option)) => option
            .get("name")
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_with_mixed_column_types() {
        let row: TemplateRow = serde_json::from_value(json!({
            "id": "555",
            "values": {
                "title": 42,
                "name": "Clinic",
                "content": { "type": "bubble" },
                "confirm_label": null,
                "reschedule_label": ["a"],
                "cancel_label": { "id": "1", "name": "Cancel", "type": "option" },
            },
        }))
        .unwrap();

        assert_eq!(row.values.title, None);
        assert_eq!(row.values.name.as_deref(), Some("Clinic"));
        assert_eq!(row.values.content, Some(json!({ "type": "bubble" })));
        assert_eq!(row.values.confirm_label, None);
        assert_eq!(row.values.reschedule_label, None);
        assert_eq!(row.values.cancel_label.as_deref(), Some("Cancel"));
        assert_eq!(row.values.message, None);
    }

    #[test]
    fn test_row_without_values() {
        let row: TemplateRow = serde_json::from_value(json!({ "id": "1" })).unwrap();
        assert!(row.values.title.is_none());
        assert!(row.values.content.is_none());
    }
}
