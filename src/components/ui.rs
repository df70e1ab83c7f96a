//! Shared Tailwind utility bundles reused across the booking components.
//! Variant tables live here so every button and toast draws from one place.

use dioxus::prelude::*;
use tailwind_fuse::tw_merge;

pub const INPUT_BASE: &str = "flex h-12 w-full rounded-lg border-2 border-lemon-light bg-white/90 px-4 py-3 text-base placeholder:text-gray-400/70 focus:outline-none focus:ring-4 focus:ring-lemon/50 focus:border-lemon-dark transition-all duration-300 shadow-md hover:shadow-lg disabled:opacity-50 disabled:cursor-not-allowed";
pub const INPUT_FIELD: &str = "rounded-lg p-3 bg-gradient-to-r from-white to-lemon-light/10 focus:ring-4 focus:ring-lemon/50 focus:border-lemon-dark transition-all duration-300 shadow-md hover:shadow-xl";
pub const LABEL: &str = "text-lg font-bold text-gray-900 tracking-tight";
pub const FIELD_ERROR: &str = "text-base text-red-600 font-semibold tracking-tight";

pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-full text-base font-bold transition-all duration-300 focus-visible:outline-none focus-visible:ring-4 focus-visible:ring-lemon/50 disabled:opacity-50 disabled:cursor-not-allowed shadow-lg hover:shadow-xl hover:scale-105 transform";
pub const TOGGLE_SELECTED: &str = "bg-gradient-to-r from-lemon to-lemon-dark text-white";
pub const TOGGLE_UNSELECTED: &str = "text-lemon hover:bg-lemon/10 hover:text-lemon-dark border-lemon";
pub const TOGGLE_SHAPE: &str =
    "rounded-full transition-all duration-300 shadow-md hover:shadow-xl hover:scale-105";

/// Joins class fragments into one string. Empty and `None` fragments are
/// skipped. Utilities that set the same property under the same variant
/// (`py-3` then `py-4`, `border-lemon` then `border-red-500`) collapse to the
/// one given last.
pub fn class_names<'a, I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<Option<&'a str>>,
{
    let joined = fragments
        .into_iter()
        .filter_map(Into::<Option<&'a str>>::into)
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    tw_merge!(joined.as_str())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Default => {
                "bg-gradient-to-r from-lemon to-lemon-dark text-white hover:from-lemon-light hover:to-lemon"
            }
            ButtonVariant::Outline => {
                "border-2 border-lemon bg-transparent text-lemon hover:bg-lemon/10 hover:text-lemon-dark"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Default => "h-12 px-6 py-3",
            ButtonSize::Lg => "h-14 px-8 py-4 text-lg",
        }
    }
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    class_names([
        Some(BUTTON_BASE),
        Some(variant.classes()),
        Some(size.classes()),
        extra,
    ])
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    #[allow(dead_code)]
    Destructive,
}

impl ToastVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastVariant::Default => {
                "border-lemon bg-gradient-to-br from-white to-lemon-light/20 text-gray-900"
            }
            ToastVariant::Destructive => "destructive border-red-500 bg-red-500/90 text-white",
        }
    }
}

/// Border treatment for a text-like input depending on its error state.
pub fn input_classes(has_error: bool) -> String {
    class_names([
        INPUT_BASE,
        "border-2",
        if has_error {
            "border-red-500"
        } else {
            "border-lemon/50 hover:border-lemon"
        },
        INPUT_FIELD,
    ])
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    class: Option<String>,
    #[props(default = "button".to_string())] kind: String,
    #[props(default)] disabled: bool,
    aria_pressed: Option<bool>,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let classes = button_classes(variant, size, class.as_deref());
    rsx! {
        button {
            r#type: "{kind}",
            class: "{classes}",
            disabled,
            aria_pressed: aria_pressed.map(|pressed| pressed.to_string()),
            aria_label,
            onclick: move |ev| {
                if let Some(handler) = onclick {
                    handler.call(ev);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Label(html_for: Option<String>, class: Option<String>, children: Element) -> Element {
    let classes = class_names([Some(LABEL), class.as_deref()]);
    rsx! {
        label { r#for: html_for, class: "{classes}", {children} }
    }
}

/// Inline validation message announced to assistive technology.
#[component]
pub fn FieldError(id: Option<String>, message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        p { id, class: FIELD_ERROR, role: "alert", "{message}" }
    }
}
