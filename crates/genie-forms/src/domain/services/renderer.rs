//! Booking Form Renderer
//!
//! Resolves a calculator schema into the concrete booking form a
//! customer fills in: one control per field, the initial data map, and
//! the required-field validation that runs on submit.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::aggregates::Calculator;
use crate::domain::value_objects::{FieldDefinition, FieldOption, FieldType, ServiceOption, SERVICE_CATALOG};

/// Submission data: field key to submitted value
pub type FormData = BTreeMap<String, Value>;

/// A calculator resolved into renderable controls
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderPlan {
    pub calculator_id: String,
    pub name: String,
    pub fields: Vec<RenderedField>,
}

/// One field resolved to its control
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedField {
    pub key: String,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub initial: Value,
    #[serde(flatten)]
    pub control: Control,
}

/// The widget a field renders as
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    TextInput,
    TextArea,
    NumberInput,
    Dropdown { options: Vec<FieldOption> },
    RadioGroup { options: Vec<FieldOption> },
    Checkbox,
    DatePicker,
    Toggle,
    ServiceChecklist { services: Vec<ServiceOption> },
}

/// The value a field starts with before the customer touches it:
/// false for boolean fields, the empty string for everything else.
pub fn initial_value(field: &FieldDefinition) -> Value {
    if field.field_type.is_boolean() {
        Value::Bool(false)
    } else {
        Value::String(String::new())
    }
}

/// Initial data map for a whole schema, keyed by field key
pub fn initial_data(fields: &[FieldDefinition]) -> FormData {
    fields
        .iter()
        .map(|field| (field.key(), initial_value(field)))
        .collect()
}

/// Resolve one field to its control
pub fn render_field(field: &FieldDefinition) -> RenderedField {
    let control = match field.field_type {
        FieldType::Text => Control::TextInput,
        FieldType::TextArea => Control::TextArea,
        FieldType::Number => Control::NumberInput,
        FieldType::Select => Control::Dropdown {
            options: field.options.clone(),
        },
        FieldType::Radio => Control::RadioGroup {
            options: field.options.clone(),
        },
        FieldType::Checkbox => Control::Checkbox,
        FieldType::Date => Control::DatePicker,
        FieldType::Switch => Control::Toggle,
        FieldType::AdditionalServices => Control::ServiceChecklist {
            services: SERVICE_CATALOG
                .iter()
                .filter(|s| field.selected_services.get(s.id).copied().unwrap_or(false))
                .copied()
                .collect(),
        },
    };

    RenderedField {
        key: field.key(),
        label: field.label.clone(),
        required: field.required,
        placeholder: field.placeholder.clone(),
        initial: initial_value(field),
        control,
    }
}

/// Resolve a calculator into the booking form a customer sees
pub fn render_plan(calculator: &Calculator) -> RenderPlan {
    RenderPlan {
        calculator_id: calculator.id().to_string(),
        name: calculator.name().to_string(),
        fields: calculator.fields().iter().map(render_field).collect(),
    }
}

/// Record one change. Keys that do not belong to the schema are
/// ignored; returns whether the change was applied.
pub fn apply_change(fields: &[FieldDefinition], data: &mut FormData, key: &str, value: Value) -> bool {
    if fields.iter().any(|f| f.key() == key) {
        data.insert(key.to_string(), value);
        true
    } else {
        false
    }
}

/// Build the stored data map for a submission: initial values overlaid
/// with every recognised entry of the customer's input.
pub fn merge_input(fields: &[FieldDefinition], input: &FormData) -> FormData {
    let mut data = initial_data(fields);
    for (key, value) in input {
        apply_change(fields, &mut data, key, value.clone());
    }
    data
}

/// A value that counts as unanswered: null, false, the empty string,
/// or the number zero. Arrays and objects never do, even when empty.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        _ => false,
    }
}

/// Check required fields in schema order; the first unanswered one wins.
pub fn validate(fields: &[FieldDefinition], data: &FormData) -> Result<(), ValidationFailure> {
    for field in fields {
        if !field.required {
            continue;
        }
        let key = field.key();
        let value = data.get(&key).unwrap_or(&Value::Null);
        if !is_blank(value) {
            continue;
        }
        let reason = if field.field_type.is_boolean() && value == &Value::Bool(false) {
            ValidationReason::MustBeChecked
        } else {
            ValidationReason::Missing
        };
        return Err(ValidationFailure {
            key,
            label: field.label.clone(),
            reason,
        });
    }
    Ok(())
}

/// A required field the customer left unanswered
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationFailure {
    pub key: String,
    pub label: String,
    pub reason: ValidationReason,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationReason {
    MustBeChecked,
    Missing,
}

impl std::error::Error for ValidationFailure {}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            ValidationReason::MustBeChecked => write!(f, "{} must be checked.", self.label),
            ValidationReason::Missing => write!(f, "{} is required.", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::EntityId;
    use serde_json::json;

    fn field(ty: FieldType, label: &str, required: bool) -> FieldDefinition {
        let mut f = FieldDefinition::new(ty);
        f.label = label.into();
        f.required = required;
        f
    }

    #[test]
    fn test_initial_data_per_type() {
        let fields = vec![
            field(FieldType::Text, "Name", false),
            field(FieldType::Checkbox, "Terms", false),
            field(FieldType::Switch, "Recurring", false),
            field(FieldType::AdditionalServices, "Extras", false),
        ];
        let data = initial_data(&fields);

        assert_eq!(data[&fields[0].key()], json!(""));
        assert_eq!(data[&fields[1].key()], json!(false));
        assert_eq!(data[&fields[2].key()], json!(false));
        assert_eq!(data[&fields[3].key()], json!(""));
        assert_eq!(data.len(), 4);
    }

    #[test]
    fn test_control_resolution() {
        let select = field(FieldType::Select, "Level", false);
        let rendered = render_field(&select);
        assert!(matches!(rendered.control, Control::Dropdown { ref options } if options.len() == 1));
        assert_eq!(rendered.initial, json!(""));

        assert_eq!(render_field(&field(FieldType::Text, "A", false)).control, Control::TextInput);
        assert_eq!(render_field(&field(FieldType::Date, "B", false)).control, Control::DatePicker);
        assert_eq!(render_field(&field(FieldType::Switch, "C", false)).control, Control::Toggle);
    }

    #[test]
    fn test_service_checklist_resolves_enabled_services() {
        let mut extras = field(FieldType::AdditionalServices, "Extras", false);
        extras.selected_services.insert("window".into(), true);
        extras.selected_services.insert("oven".into(), true);
        extras.selected_services.insert("patio".into(), false);

        let rendered = render_field(&extras);
        match rendered.control {
            Control::ServiceChecklist { services } => {
                let ids: Vec<&str> = services.iter().map(|s| s.id).collect();
                // catalog order, disabled entries dropped
                assert_eq!(ids, vec!["oven", "window"]);
                assert_eq!(services[0].name, "Oven");
            }
            other => panic!("expected service checklist, got {:?}", other),
        }
    }

    #[test]
    fn test_render_plan_keeps_field_order() {
        let calc = Calculator::create(
            "Quote",
            vec![
                field(FieldType::Text, "Name", true),
                field(FieldType::Date, "When", false),
            ],
            EntityId::new(),
        )
        .unwrap();

        let plan = render_plan(&calc);
        assert_eq!(plan.name, "Quote");
        assert_eq!(plan.fields.len(), 2);
        assert_eq!(plan.fields[0].label, "Name");
        assert_eq!(plan.fields[1].label, "When");
    }

    #[test]
    fn test_apply_change_ignores_unknown_keys() {
        let fields = vec![field(FieldType::Text, "Name", false)];
        let mut data = initial_data(&fields);

        assert!(apply_change(&fields, &mut data, &fields[0].key(), json!("Ada")));
        assert!(!apply_change(&fields, &mut data, "injected", json!("x")));
        assert_eq!(data.len(), 1);
        assert_eq!(data[&fields[0].key()], json!("Ada"));
    }

    #[test]
    fn test_merge_input_fills_untouched_fields() {
        let fields = vec![
            field(FieldType::Text, "Name", false),
            field(FieldType::Checkbox, "Terms", false),
        ];
        let mut input = FormData::new();
        input.insert(fields[0].key(), json!("Ada"));
        input.insert("junk".into(), json!(1));

        let data = merge_input(&fields, &input);
        assert_eq!(data[&fields[0].key()], json!("Ada"));
        assert_eq!(data[&fields[1].key()], json!(false));
        assert!(data.get("junk").is_none());
    }

    #[test]
    fn test_blank_values() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&json!(false)));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!(0)));
        assert!(!is_blank(&json!("0")));
        assert!(!is_blank(&json!(" ")));
        assert!(!is_blank(&json!(true)));
        assert!(!is_blank(&json!([])));
        assert!(!is_blank(&json!({})));
    }

    #[test]
    fn test_validate_first_failure_wins() {
        let fields = vec![
            field(FieldType::Text, "Name", true),
            field(FieldType::Checkbox, "Terms", true),
        ];
        let data = initial_data(&fields);

        let failure = validate(&fields, &data).unwrap_err();
        assert_eq!(failure.label, "Name");
        assert_eq!(failure.to_string(), "Name is required.");
    }

    #[test]
    fn test_validate_boolean_message() {
        let fields = vec![field(FieldType::Switch, "Accept Terms", true)];
        let data = initial_data(&fields);

        let failure = validate(&fields, &data).unwrap_err();
        assert_eq!(failure.reason, ValidationReason::MustBeChecked);
        assert_eq!(failure.to_string(), "Accept Terms must be checked.");
    }

    #[test]
    fn test_validate_passes_when_answered() {
        let fields = vec![
            field(FieldType::Text, "Name", true),
            field(FieldType::Checkbox, "Terms", true),
            field(FieldType::Text, "Notes", false),
        ];
        let mut data = initial_data(&fields);
        data.insert(fields[0].key(), json!("Ada"));
        data.insert(fields[1].key(), json!(true));

        assert!(validate(&fields, &data).is_ok());
    }

    #[test]
    fn test_validate_missing_key_counts_as_unanswered() {
        let fields = vec![field(FieldType::Text, "Name", true)];
        let data = FormData::new();

        let failure = validate(&fields, &data).unwrap_err();
        assert_eq!(failure.reason, ValidationReason::Missing);
    }
}
