//! # Input Components
//!
//! Reusable form input components for the CineDesk UI:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection
//! - **Checkbox**: Boolean checkbox
//!
//! All components follow consistent styling via the embedded stylesheet.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, date, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            class: "form-group",

            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            input {
                class: "form-input",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(help) = &props.help_text {
                p { class: "form-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div {
            class: "form-group",

            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            textarea {
                class: "form-textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(help) = &props.help_text {
                p { class: "form-help", "{help}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// Option entry for the Select component
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    /// Submitted value
    pub value: String,
    /// Visible label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Currently selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Label for the empty/unselected entry (always rendered first)
    #[props(default)]
    pub empty_label: Option<String>,

    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown selection component
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div {
            class: "form-group",

            if let Some(label) = &props.label {
                label {
                    class: "form-label",
                    "{label}"
                    if props.required {
                        span { class: "required-mark", "*" }
                    }
                }
            }

            select {
                class: "form-select",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(empty) = &props.empty_label {
                    option { value: "", selected: props.value.is_empty(), "{empty}" }
                }

                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: props.value == opt.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether the checkbox is checked
    pub checked: bool,

    /// Label text
    pub label: String,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Boolean checkbox component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label {
            class: "checkbox-row",

            input {
                r#type: "checkbox",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| props.on_change.call(!props.checked),
            }

            span { class: "checkbox-label", "{props.label}" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("p1", "Alice");
        assert_eq!(opt.value, "p1");
        assert_eq!(opt.label, "Alice");
    }
}
