//! Choice Field Options
//!
//! Options for dropdown and radio fields. The stored `value` is derived
//! from the label, so renamed options keep a predictable wire shape.

use serde::{Deserialize, Serialize};

use super::collapse_whitespace;

/// One selectable option of a dropdown or radio field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option with its value derived from the label
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: option_value_from_label(&label),
            label,
        }
    }

    /// The builder's numbered default, e.g. `option2` / "Option 2"
    pub fn numbered(n: usize) -> Self {
        Self {
            value: format!("option{n}"),
            label: format!("Option {n}"),
        }
    }
}

/// Derive an option value from its label: lowercased, whitespace runs
/// replaced with hyphens ("Deep Clean" becomes "deep-clean").
pub fn option_value_from_label(label: &str) -> String {
    collapse_whitespace(label, '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_derivation() {
        assert_eq!(option_value_from_label("Deep Clean"), "deep-clean");
        assert_eq!(option_value_from_label("Move  In / Out"), "move-in-/-out");
        let opt = FieldOption::from_label("Standard Clean");
        assert_eq!(opt.value, "standard-clean");
        assert_eq!(opt.label, "Standard Clean");
    }

    #[test]
    fn test_numbered_defaults() {
        let opt = FieldOption::numbered(1);
        assert_eq!(opt.value, "option1");
        assert_eq!(opt.label, "Option 1");
        assert_eq!(FieldOption::numbered(3).value, "option3");
    }
}
