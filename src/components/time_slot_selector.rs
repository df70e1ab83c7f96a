use dioxus::prelude::*;

use crate::booking::TimeSlot;
use crate::components::ui::{
    Button, ButtonVariant, FieldError, LABEL, TOGGLE_SELECTED, TOGGLE_SHAPE, TOGGLE_UNSELECTED,
    class_names,
};

#[component]
pub fn TimeSlotSelector(
    selected_time: Option<TimeSlot>,
    on_select: EventHandler<TimeSlot>,
    error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "space-y-3",
            label { class: LABEL, "Select Time" }
            div { class: "grid grid-cols-3 gap-2 sm:grid-cols-4",
                for slot in TimeSlot::all() {
                    {
                        let selected = selected_time == Some(slot);
                        rsx! {
                            Button {
                                key: "{slot}",
                                variant: if selected { ButtonVariant::Default } else { ButtonVariant::Outline },
                                class: class_names([
                                    if selected { TOGGLE_SELECTED } else { TOGGLE_UNSELECTED },
                                    TOGGLE_SHAPE,
                                ]),
                                disabled,
                                aria_pressed: selected,
                                onclick: move |_| on_select.call(slot),
                                "{slot}"
                            }
                        }
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
