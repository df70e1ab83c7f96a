use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::components::ui::{FieldError, Label, input_classes};
use crate::utils::{format_iso_date, parse_date_input, today};

const DATE_INPUT_ID: &str = "date";

fn date_input_text(date: Option<NaiveDate>) -> String {
    date.map(format_iso_date).unwrap_or_default()
}

#[component]
pub fn DatePicker(
    selected_date: Option<NaiveDate>,
    on_change: EventHandler<NaiveDate>,
    error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    // The input owns its text while the user types; only resync when the
    // canonical date changes underneath it.
    let mut date_text = use_signal(|| date_input_text(selected_date));
    use_effect(use_reactive((&selected_date,), move |(selected_date,)| {
        date_text.set(date_input_text(selected_date));
    }));

    let min_date = format_iso_date(today());
    let error_id = format!("{DATE_INPUT_ID}-error");
    let has_error = error.is_some();
    let described_by = error.as_ref().map(|_| error_id.clone());

    rsx! {
        div { class: "space-y-3",
            Label { html_for: DATE_INPUT_ID.to_string(), "Select Date" }
            input {
                id: DATE_INPUT_ID,
                r#type: "date",
                class: input_classes(has_error),
                value: "{date_text()}",
                min: "{min_date}",
                aria_invalid: has_error.to_string(),
                aria_describedby: described_by,
                disabled,
                oninput: move |ev| {
                    let value = ev.value();
                    match parse_date_input(&value) {
                        Ok(date) => {
                            date_text.set(value);
                            on_change.call(date);
                        }
                        Err(e) => tracing::debug!("Ignoring date edit: {e}"),
                    }
                },
            }
            FieldError { id: error_id, message: error }
        }
    }
}
