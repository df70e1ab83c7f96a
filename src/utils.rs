use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use wasm_bindgen::JsValue;
use web_sys::js_sys;

pub(crate) const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `1/10/2025` style, as shown in the confirmation toast.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Value format of `<input type="date">`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_date_input(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|e| anyhow::anyhow!("Invalid date {value:?}: {e}"))
}

/// Resolves after `delay` using the browser's `setTimeout`. Stands in for the
/// booking request round trip.
pub async fn simulate_latency(delay: Duration) {
    let millis = delay.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            tracing::warn!("setTimeout unavailable, resolving immediately");
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
