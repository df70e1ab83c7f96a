use dioxus::prelude::*;

use crate::config::AppConfig;

use super::booking_form::BookingFormView;

#[component]
fn LogoHeader() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        header { class: "py-6",
            div {
                class: "w-20 h-20 mx-auto rounded-full shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-110 bg-lemon-light flex items-center justify-center",
                role: "img",
                aria_label: "{config.logo_label()}",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    class: "w-14 h-14",
                    view_box: "0 0 64 64",
                    ellipse {
                        cx: "32",
                        cy: "34",
                        rx: "22",
                        ry: "17",
                        fill: "#F4CE14",
                        stroke: "#C9A800",
                        stroke_width: "2",
                    }
                    path {
                        d: "M32 17c2-6 8-9 14-8-2 6-8 9-14 8z",
                        fill: "#495E57",
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn MainLayout() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-b from-lemon-light/30 via-lemon/10 to-white flex flex-col items-center justify-start",
            LogoHeader {}
            main { class: "w-full max-w-md px-4",
                h1 { class: "text-4xl font-extrabold text-gray-900 text-center mb-8 tracking-tight drop-shadow-md",
                    "{config.page_title()}"
                }
                BookingFormView {}
            }
        }
    }
}
