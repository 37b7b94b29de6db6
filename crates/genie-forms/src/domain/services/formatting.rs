//! Submission Display Formatting
//!
//! Turns stored submission entries back into the labels and values the
//! dashboard shows. Works from whatever schema is still around: when a
//! calculator has been deleted, keys render raw and values fall back to
//! generic formatting.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::domain::value_objects::{service_name, FieldDefinition, FieldType};

use super::renderer::is_blank;

/// Find the schema field a data key belongs to
pub fn resolve_field<'a>(fields: &'a [FieldDefinition], key: &str) -> Option<&'a FieldDefinition> {
    fields.iter().find(|f| f.key() == key)
}

/// Display label for a data key, falling back to the raw key
pub fn field_label(fields: &[FieldDefinition], key: &str) -> String {
    resolve_field(fields, key)
        .map(|f| f.label.clone())
        .unwrap_or_else(|| key.to_string())
}

/// Format a stored value for display.
///
/// Dates render as a calendar date, booleans as Yes/No, choice values
/// as their option label, selected services by their catalog names,
/// and unanswered values as "N/A".
pub fn format_value(fields: &[FieldDefinition], key: &str, value: &Value) -> String {
    let field = resolve_field(fields, key);

    if let Some(field) = field {
        if field.field_type == FieldType::Date && !is_blank(value) {
            if let Some(date) = format_date(value) {
                return date;
            }
        }
    }

    if let Value::Bool(checked) = value {
        return if *checked { "Yes" } else { "No" }.to_string();
    }

    if let Some(field) = field {
        if field.field_type.has_options() && !is_blank(value) {
            if let Value::String(raw) = value {
                if let Some(option) = field.options.iter().find(|o| &o.value == raw) {
                    return option.label.clone();
                }
            }
        }
        if field.field_type.is_multi_service() {
            if let Value::Array(items) = value {
                return items
                    .iter()
                    .map(|item| match item {
                        Value::String(id) => service_name(id).map(str::to_string).unwrap_or_else(|| id.clone()),
                        other => display(other),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
    }

    if is_blank(value) {
        "N/A".to_string()
    } else {
        display(value)
    }
}

fn format_date(value: &Value) -> Option<String> {
    let raw = value.as_str()?;
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%B %-d, %Y").to_string())
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FieldOption, FieldType};
    use serde_json::json;

    fn schema() -> Vec<FieldDefinition> {
        let mut name = FieldDefinition::new(FieldType::Text);
        name.id = "f_name".into();
        name.label = "Your Name".into();

        let mut level = FieldDefinition::new(FieldType::Select);
        level.id = "f_level".into();
        level.label = "Service Level".into();
        level.options = vec![
            FieldOption::from_label("Standard Clean"),
            FieldOption::from_label("Deep Clean"),
        ];

        let mut when = FieldDefinition::new(FieldType::Date);
        when.id = "f_when".into();
        when.label = "Preferred Date".into();

        let mut extras = FieldDefinition::new(FieldType::AdditionalServices);
        extras.id = "f_extras".into();
        extras.label = "Extras".into();

        vec![name, level, when, extras]
    }

    #[test]
    fn test_label_resolution() {
        let fields = schema();
        assert_eq!(field_label(&fields, "f_level"), "Service Level");
        assert_eq!(field_label(&fields, "mystery_key"), "mystery_key");
        assert_eq!(field_label(&[], "f_level"), "f_level");
    }

    #[test]
    fn test_label_falls_back_through_slug() {
        let mut field = FieldDefinition::new(FieldType::Text);
        field.id = String::new();
        field.label = "Street Address".into();
        let fields = vec![field];
        assert_eq!(field_label(&fields, "street_address"), "Street Address");
    }

    #[test]
    fn test_boolean_values() {
        let fields = schema();
        assert_eq!(format_value(&fields, "anything", &json!(true)), "Yes");
        assert_eq!(format_value(&fields, "anything", &json!(false)), "No");
        // booleans render Yes/No even with no schema at all
        assert_eq!(format_value(&[], "anything", &json!(false)), "No");
    }

    #[test]
    fn test_option_label_resolution() {
        let fields = schema();
        assert_eq!(
            format_value(&fields, "f_level", &json!("deep-clean")),
            "Deep Clean"
        );
        // unknown option values render raw
        assert_eq!(
            format_value(&fields, "f_level", &json!("bespoke")),
            "bespoke"
        );
        // empty selection renders as unanswered
        assert_eq!(format_value(&fields, "f_level", &json!("")), "N/A");
    }

    #[test]
    fn test_date_formatting() {
        let fields = schema();
        assert_eq!(
            format_value(&fields, "f_when", &json!("2026-03-09T00:00:00Z")),
            "March 9, 2026"
        );
        assert_eq!(
            format_value(&fields, "f_when", &json!("2026-11-28")),
            "November 28, 2026"
        );
        // unparseable dates render raw
        assert_eq!(
            format_value(&fields, "f_when", &json!("soonish")),
            "soonish"
        );
    }

    #[test]
    fn test_service_list_resolves_names() {
        let fields = schema();
        assert_eq!(
            format_value(&fields, "f_extras", &json!(["oven", "washer-dryer"])),
            "Oven, Washer/Dryer"
        );
        assert_eq!(
            format_value(&fields, "f_extras", &json!(["oven", "mystery"])),
            "Oven, mystery"
        );
    }

    #[test]
    fn test_unanswered_values() {
        let fields = schema();
        assert_eq!(format_value(&fields, "f_name", &json!("")), "N/A");
        assert_eq!(format_value(&fields, "f_name", &Value::Null), "N/A");
        assert_eq!(format_value(&fields, "f_name", &json!(0)), "N/A");
    }

    #[test]
    fn test_plain_values_render_raw() {
        let fields = schema();
        assert_eq!(format_value(&fields, "f_name", &json!("Ada")), "Ada");
        assert_eq!(format_value(&fields, "f_name", &json!(42)), "42");
        // orphan submissions: no schema, raw rendering
        assert_eq!(format_value(&[], "f_name", &json!("Ada")), "Ada");
    }
}
