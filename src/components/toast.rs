use dioxus::prelude::*;

use crate::components::ui::class_names;
use crate::notifications::{Notification, NotificationQueue};

const VIEWPORT: &str = "fixed top-4 right-4 z-[100] flex max-h-screen w-full max-w-sm flex-col gap-3 p-4 sm:bottom-4 sm:right-4 sm:top-auto md:max-w-md";
const TOAST: &str = "group pointer-events-auto relative flex w-full items-center justify-between space-x-4 overflow-hidden rounded-xl border-2 p-6 pr-8 shadow-2xl transition-all duration-500 transform animate-slide-in hover:scale-105";
const TOAST_TITLE: &str = "text-xl font-bold text-gray-900 tracking-tight";
const TOAST_DESCRIPTION: &str = "text-lg opacity-90 text-gray-800";
const TOAST_ACTION: &str = "inline-flex h-10 shrink-0 items-center justify-center rounded-lg border-2 border-lemon-light bg-lemon text-white px-4 text-base font-bold transition-all duration-300 hover:bg-lemon-dark hover:shadow-lg focus:outline-none focus:ring-4 focus:ring-lemon/50 disabled:pointer-events-none disabled:opacity-50 group-[.destructive]:border-red-300 group-[.destructive]:bg-red-600 group-[.destructive]:hover:bg-red-700 group-[.destructive]:focus:ring-red-500";
const TOAST_CLOSE: &str = "absolute right-3 top-3 rounded-full p-1 text-gray-600 opacity-0 transition-all duration-300 hover:text-gray-900 hover:bg-lemon/20 focus:opacity-100 focus:outline-none focus:ring-4 focus:ring-lemon/50 group-hover:opacity-100 group-[.destructive]:text-red-200 group-[.destructive]:hover:text-red-100 group-[.destructive]:hover:bg-red-500/20 group-[.destructive]:focus:ring-red-500";

/// Dismisses the toast with `id` at whatever index it holds when closed.
/// Toasts already gone are ignored.
pub(crate) fn close_toast(mut notifications: Signal<NotificationQueue>, id: u64) {
    let mut queue = notifications.write();
    match queue.position(id) {
        Some(index) => {
            queue.dismiss(index);
        }
        None => tracing::debug!("Toast {id} already closed"),
    }
}

/// Renders every queued notification.
#[component]
pub fn ToastViewport(notifications: Signal<NotificationQueue>) -> Element {
    if notifications.read().is_empty() {
        return rsx! {};
    }
    let items = notifications.read().items().to_vec();

    rsx! {
        ol { class: VIEWPORT, aria_label: "Notifications",
            for notification in items {
                {
                    let id = notification.id;
                    rsx! {
                        Toast {
                            key: "{id}",
                            notification,
                            on_close: move |_| close_toast(notifications, id),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Toast(notification: Notification, on_close: EventHandler<()>) -> Element {
    let classes = class_names([TOAST, notification.variant.classes()]);
    let action_label = notification.action.as_ref().map(|a| a.label.clone());
    let action = notification.action.clone();

    rsx! {
        li {
            class: "{classes}",
            role: "status",
            aria_live: "polite",
            "data-state": "open",
            div { class: "grid gap-1",
                if let Some(title) = &notification.title {
                    div { class: TOAST_TITLE, "{title}" }
                }
                if let Some(lines) = &notification.description {
                    div { class: TOAST_DESCRIPTION,
                        div { class: "space-y-3",
                            for line in lines.iter() {
                                p { class: "text-lg", "{line}" }
                            }
                        }
                    }
                }
            }
            if let Some(label) = action_label {
                button {
                    r#type: "button",
                    class: TOAST_ACTION,
                    onclick: move |_| {
                        if let Some(action) = &action {
                            action.invoke();
                        }
                        on_close.call(());
                    },
                    "{label}"
                }
            }
            button {
                r#type: "button",
                class: TOAST_CLOSE,
                aria_label: "Close",
                "toast-close": "",
                onclick: move |_| on_close.call(()),
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    class: "h-6 w-6",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M6 18L18 6M6 6l12 12",
                    }
                }
            }
        }
    }
}
