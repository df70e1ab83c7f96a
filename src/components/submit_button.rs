use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonSize};

#[component]
pub fn SubmitButton(is_submitting: bool, #[props(default)] disabled: bool) -> Element {
    rsx! {
        Button {
            kind: "submit",
            size: ButtonSize::Lg,
            class: "w-full bg-gradient-to-r from-lemon to-lemon-dark text-white font-bold rounded-full transition-all duration-300 shadow-lg hover:shadow-2xl hover:scale-105",
            disabled: is_submitting || disabled,
            aria_label: "Submit booking request",
            if is_submitting {
                span { class: "flex items-center justify-center",
                    svg {
                        class: "animate-spin h-6 w-6 mr-2 text-white",
                        xmlns: "http://www.w3.org/2000/svg",
                        fill: "none",
                        view_box: "0 0 24 24",
                        circle {
                            class: "opacity-25",
                            cx: "12",
                            cy: "12",
                            r: "10",
                            stroke: "currentColor",
                            stroke_width: "4",
                        }
                        path {
                            class: "opacity-75",
                            fill: "currentColor",
                            d: "M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z",
                        }
                    }
                    "Submitting..."
                }
            } else {
                "Book Now"
            }
        }
    }
}
