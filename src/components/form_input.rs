use dioxus::prelude::*;

use crate::components::ui::{FieldError, Label, input_classes};

/// Labelled single-line text field with inline error reporting.
#[component]
pub fn FormInput(
    label: String,
    id: String,
    value: String,
    on_change: EventHandler<String>,
    error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let error_id = format!("{id}-error");
    let has_error = error.is_some();
    let described_by = error.as_ref().map(|_| error_id.clone());
    let placeholder = format!("Enter your {}", label.to_lowercase());

    rsx! {
        div { class: "space-y-3",
            Label { html_for: id.clone(), "{label}" }
            input {
                id: "{id}",
                r#type: "text",
                class: input_classes(has_error),
                value: "{value}",
                placeholder: "{placeholder}",
                aria_invalid: has_error.to_string(),
                aria_describedby: described_by,
                disabled,
                oninput: move |ev| on_change.call(ev.value()),
            }
            FieldError { id: error_id, message: error }
        }
    }
}
