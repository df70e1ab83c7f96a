use dioxus::prelude::*;

use crate::booking::GuestOption;
use crate::components::ui::{
    Button, ButtonVariant, FieldError, LABEL, TOGGLE_SELECTED, TOGGLE_SHAPE, TOGGLE_UNSELECTED,
    class_names,
};

#[component]
pub fn GuestSelector(
    selected_guests: u8,
    on_select: EventHandler<u8>,
    error: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        div { class: "space-y-3",
            label { class: LABEL, "Number of Guests" }
            div { class: "flex flex-wrap gap-2",
                for option in GuestOption::all().iter().copied() {
                    {
                        let selected = option.is_selected(selected_guests);
                        rsx! {
                            Button {
                                key: "{option.label()}",
                                variant: if selected { ButtonVariant::Default } else { ButtonVariant::Outline },
                                class: class_names([
                                    if selected { TOGGLE_SELECTED } else { TOGGLE_UNSELECTED },
                                    TOGGLE_SHAPE,
                                ]),
                                disabled,
                                aria_pressed: selected,
                                onclick: move |_| on_select.call(option.guests()),
                                "{option.label()}"
                            }
                        }
                    }
                }
            }
            FieldError { message: error }
        }
    }
}
