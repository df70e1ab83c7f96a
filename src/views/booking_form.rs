use std::time::Duration;

use dioxus::prelude::*;

use crate::booking::{
    BookingDraft, BookingField, BookingForm, FieldUpdate, PendingBooking, SubmitOutcome,
};
use crate::components::{
    DatePicker, FormInput, GuestSelector, SubmitButton, TimeSlotSelector, ToastViewport,
};
use crate::config::AppConfig;
use crate::notifications::NotificationQueue;

/// Waits out the fake request, then confirms the booking and freezes the form.
pub(crate) async fn complete_submission(
    mut form: Signal<BookingForm>,
    mut notifications: Signal<NotificationQueue>,
    pending: PendingBooking,
    delay: Duration,
) {
    let guest = pending.draft().name.clone();
    let confirmation = pending.settle(delay).await;
    notifications.write().enqueue(confirmation);
    form.write().finish_submission();
    tracing::info!("Booking confirmed for {guest}");
}

/// Runs one submit attempt. An accepted booking is confirmed in the
/// background after `delay`; anything else leaves the queue alone.
pub(crate) fn submit_booking(
    mut form: Signal<BookingForm>,
    notifications: Signal<NotificationQueue>,
    delay: Duration,
) -> SubmitOutcome {
    let outcome = form.write().submit();
    if let SubmitOutcome::Accepted(pending) = &outcome {
        spawn(complete_submission(
            form,
            notifications,
            pending.clone(),
            delay,
        ));
    }
    outcome
}

#[component]
pub fn BookingFormView() -> Element {
    let config = use_context::<AppConfig>();
    let mut form = use_signal(|| BookingForm::new(BookingDraft::default()));
    let notifications = use_signal(NotificationQueue::new);

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        submit_booking(form, notifications, config.submit_delay);
    };

    let state = form.read().clone();
    let draft = state.draft();
    let disabled = state.fields_disabled();

    rsx! {
        form {
            class: "space-y-8 bg-gradient-to-br from-white to-lemon-light/20 p-8 rounded-2xl shadow-2xl transform transition-all duration-500 hover:shadow-3xl",
            aria_label: "Restaurant booking form",
            onsubmit: on_submit,
            FormInput {
                label: "Name",
                id: "name",
                value: draft.name.clone(),
                on_change: move |name| form.write().update_field(FieldUpdate::Name(name)),
                error: state.error(BookingField::Name),
                disabled,
            }
            DatePicker {
                selected_date: draft.date,
                on_change: move |date| form.write().update_field(FieldUpdate::Date(date)),
                error: state.error(BookingField::Date),
                disabled,
            }
            TimeSlotSelector {
                selected_time: draft.time,
                on_select: move |slot| form.write().update_field(FieldUpdate::Time(slot)),
                error: state.error(BookingField::Time),
                disabled,
            }
            GuestSelector {
                selected_guests: draft.guests,
                on_select: move |guests| form.write().update_field(FieldUpdate::Guests(guests)),
                error: state.error(BookingField::Guests),
                disabled,
            }
            SubmitButton {
                is_submitting: state.is_submitting(),
                disabled: state.is_submitted(),
            }
        }
        ToastViewport { notifications }
    }
}
