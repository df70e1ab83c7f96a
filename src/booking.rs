use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::notifications::Notification;
use crate::utils::{format_display_date, simulate_latency, today};

pub(crate) const DEFAULT_GUESTS: u8 = 2;
pub(crate) const CONFIRMATION_TITLE: &str = "Booking Confirmed!";

const FIRST_SLOT_HOUR: u8 = 10;
const SLOT_COUNT: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Date,
    Time,
    Guests,
}

impl BookingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Guests => "guests",
        }
    }
}

/// A half-hour reservation slot between 10:00 and 22:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// Every bookable slot, in order.
    pub fn all() -> Vec<TimeSlot> {
        (0..SLOT_COUNT)
            .map(|i| TimeSlot {
                hour: FIRST_SLOT_HOUR + (i / 2) as u8,
                minute: if i % 2 == 0 { 0 } else { 30 },
            })
            .collect()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("Time slot must look like HH:MM, got {s:?}"))?;
        let slot = TimeSlot {
            hour: hour.parse()?,
            minute: minute.parse()?,
        };
        if hour.len() != 2 || minute.len() != 2 || !TimeSlot::all().contains(&slot) {
            return Err(anyhow::anyhow!("{s:?} is not a bookable time slot"));
        }
        Ok(slot)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Party size choices offered by the guest selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestOption {
    Exactly(u8),
    SixOrMore,
}

impl GuestOption {
    pub fn all() -> &'static [GuestOption] {
        &[
            GuestOption::Exactly(2),
            GuestOption::Exactly(3),
            GuestOption::Exactly(4),
            GuestOption::Exactly(5),
            GuestOption::SixOrMore,
        ]
    }

    pub fn label(&self) -> String {
        match self {
            GuestOption::Exactly(n) => n.to_string(),
            GuestOption::SixOrMore => "6+".to_string(),
        }
    }

    /// "6+" collapses to a party of exactly six.
    pub fn guests(&self) -> u8 {
        match self {
            GuestOption::Exactly(n) => *n,
            GuestOption::SixOrMore => 6,
        }
    }

    pub fn is_selected(&self, guests: u8) -> bool {
        match self {
            GuestOption::Exactly(n) => *n == guests,
            GuestOption::SixOrMore => guests >= 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub guests: u8,
}

impl BookingDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            name: String::new(),
            date: Some(date),
            time: None,
            guests: DEFAULT_GUESTS,
        }
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new(today())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Date(NaiveDate),
    Time(TimeSlot),
    Guests(u8),
}

impl FieldUpdate {
    pub fn field(&self) -> BookingField {
        match self {
            FieldUpdate::Name(_) => BookingField::Name,
            FieldUpdate::Date(_) => BookingField::Date,
            FieldUpdate::Time(_) => BookingField::Time,
            FieldUpdate::Guests(_) => BookingField::Guests,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<BookingField, String>,
}

impl FieldErrors {
    pub fn get(&self, field: BookingField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: BookingField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn clear(&mut self, field: BookingField) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = BookingField> + '_ {
        self.errors.keys().copied()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// A validated draft waiting out the simulated network round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingBooking {
    draft: BookingDraft,
}

impl PendingBooking {
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn confirmation(&self) -> Notification {
        let draft = &self.draft;
        let date = draft
            .date
            .map(format_display_date)
            .unwrap_or_default();
        let time = draft.time.map(|t| t.to_string()).unwrap_or_default();
        Notification::new()
            .title(CONFIRMATION_TITLE)
            .description(vec![
                format!("Name: {}", draft.name),
                format!("Date: {date}"),
                format!("Time: {time}"),
                format!("Guests: {}", draft.guests),
            ])
    }

    /// Resolves to the confirmation once the fake request has "completed".
    pub async fn settle(self, delay: Duration) -> Notification {
        simulate_latency(delay).await;
        self.confirmation()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are populated and the form stays editable.
    Rejected,
    Accepted(PendingBooking),
    /// A submission is already in flight or the booking is already made.
    Ignored,
}

/// Owns the draft, its validation errors, and where the form is in the
/// submit lifecycle. Once submitted the form is frozen for the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    draft: BookingDraft,
    errors: FieldErrors,
    phase: SubmissionPhase,
}

impl BookingForm {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            draft,
            errors: FieldErrors::default(),
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn error(&self, field: BookingField) -> Option<String> {
        self.errors.get(field).map(str::to_string)
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Fields lock for the simulated round trip and stay locked once booked.
    pub fn fields_disabled(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    /// Overwrites one field and drops its error without re-validating.
    pub fn update_field(&mut self, update: FieldUpdate) {
        self.errors.clear(update.field());
        match update {
            FieldUpdate::Name(name) => self.draft.name = name,
            FieldUpdate::Date(date) => self.draft.date = Some(date),
            FieldUpdate::Time(time) => self.draft.time = Some(time),
            FieldUpdate::Guests(guests) => self.draft.guests = guests,
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::default();
        if self.draft.name.trim().is_empty() {
            errors.set(BookingField::Name, "Name is required");
        }
        if self.draft.date.is_none() {
            errors.set(BookingField::Date, "Date is required");
        }
        if self.draft.time.is_none() {
            errors.set(BookingField::Time, "Time is required");
        }
        if self.draft.guests == 0 {
            errors.set(BookingField::Guests, "Please select number of guests");
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != SubmissionPhase::Idle {
            return SubmitOutcome::Ignored;
        }
        if !self.validate() {
            tracing::info!(
                "Booking rejected, invalid fields: {:?}",
                self.errors.fields().map(|f| f.as_str()).collect::<Vec<_>>()
            );
            return SubmitOutcome::Rejected;
        }
        self.phase = SubmissionPhase::Submitting;
        match serde_json::to_string(&self.draft) {
            Ok(payload) => tracing::info!("Submitting booking {payload}"),
            Err(e) => tracing::warn!("Submitting booking, payload not serializable: {e}"),
        }
        SubmitOutcome::Accepted(PendingBooking {
            draft: self.draft.clone(),
        })
    }

    pub fn finish_submission(&mut self) {
        if self.phase == SubmissionPhase::Submitting {
            self.phase = SubmissionPhase::Submitted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new(BookingDraft::new(date(2025, 1, 10)));
        form.update_field(FieldUpdate::Name("Ana".to_string()));
        form.update_field(FieldUpdate::Time("12:30".parse().unwrap()));
        form.update_field(FieldUpdate::Guests(4));
        form
    }

    #[test]
    fn test_time_slots_cover_opening_hours() {
        let slots = TimeSlot::all();
        assert_eq!(slots.len(), 25);
        assert_eq!(slots.first().unwrap().to_string(), "10:00");
        assert_eq!(slots[1].to_string(), "10:30");
        assert_eq!(slots.last().unwrap().to_string(), "22:00");
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_time_slot_parse() {
        let slot: TimeSlot = "12:30".parse().expect("12:30 is a slot");
        assert_eq!((slot.hour, slot.minute), (12, 30));
        assert_eq!(slot.to_string(), "12:30");

        assert!("22:30".parse::<TimeSlot>().is_err(), "after closing");
        assert!("09:30".parse::<TimeSlot>().is_err(), "before opening");
        assert!("12:15".parse::<TimeSlot>().is_err(), "off the half hour");
        assert!("9:00".parse::<TimeSlot>().is_err(), "not zero padded");
        assert!("".parse::<TimeSlot>().is_err());
        assert!("noon".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_guest_options() {
        let labels: Vec<_> = GuestOption::all().iter().map(|o| o.label()).collect();
        assert_eq!(labels, ["2", "3", "4", "5", "6+"]);
        assert_eq!(GuestOption::SixOrMore.guests(), 6);
        assert!(GuestOption::SixOrMore.is_selected(6));
        assert!(GuestOption::Exactly(4).is_selected(4));
        assert!(!GuestOption::Exactly(4).is_selected(6));
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = BookingDraft::new(date(2025, 3, 1));
        assert_eq!(draft.name, "");
        assert_eq!(draft.date, Some(date(2025, 3, 1)));
        assert_eq!(draft.time, None);
        assert_eq!(draft.guests, 2);
    }

    #[test]
    fn test_validate_empty_name() {
        for name in ["", "   ", "\t\n"] {
            let mut form = filled_form();
            form.update_field(FieldUpdate::Name(name.to_string()));
            assert!(!form.validate(), "name {name:?} should be rejected");
            assert_eq!(form.errors.get(BookingField::Name), Some("Name is required"));
        }
    }

    #[test]
    fn test_validate_complete_draft() {
        let mut form = filled_form();
        assert!(form.validate());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_validate_unreachable_defaults_still_checked() {
        let mut form = BookingForm::new(BookingDraft {
            name: "Ana".to_string(),
            date: None,
            time: Some("10:00".parse().unwrap()),
            guests: 0,
        });
        assert!(!form.validate());
        assert_eq!(form.errors.get(BookingField::Date), Some("Date is required"));
        assert_eq!(
            form.errors.get(BookingField::Guests),
            Some("Please select number of guests")
        );
    }

    #[test]
    fn test_update_clears_only_that_field_error() {
        let mut form = BookingForm::new(BookingDraft::new(date(2025, 1, 10)));
        assert!(!form.validate());
        assert!(form.errors.get(BookingField::Time).is_some());

        // Still invalid, but the error goes away until the next validation.
        form.update_field(FieldUpdate::Name("  ".to_string()));
        assert_eq!(form.errors.get(BookingField::Name), None);
        assert!(form.errors.get(BookingField::Time).is_some());

        assert!(!form.validate());
        assert!(form.errors.get(BookingField::Name).is_some());
    }

    #[test]
    fn test_submit_invalid_is_rejected() {
        let mut form = BookingForm::new(BookingDraft::new(date(2025, 1, 10)));
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        let fields: Vec<_> = form.errors.fields().collect();
        assert_eq!(fields, [BookingField::Name, BookingField::Time]);
        assert_eq!(form.phase, SubmissionPhase::Idle);
        assert!(!form.is_submitted());
        assert!(!form.fields_disabled());
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut form = filled_form();
        let SubmitOutcome::Accepted(pending) = form.submit() else {
            panic!("valid draft should be accepted");
        };
        assert!(form.is_submitting());
        assert!(form.fields_disabled());
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
        assert_eq!(pending.draft().name, "Ana");

        form.finish_submission();
        assert!(form.is_submitted());
        assert!(!form.is_submitting());
        assert!(form.fields_disabled());
        assert_eq!(form.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn test_finish_without_submit_is_noop() {
        let mut form = filled_form();
        form.finish_submission();
        assert_eq!(form.phase, SubmissionPhase::Idle);
    }

    #[test]
    fn test_confirmation_summarizes_draft() {
        let mut form = filled_form();
        let SubmitOutcome::Accepted(pending) = form.submit() else {
            panic!("valid draft should be accepted");
        };
        let notification = pending.confirmation();
        assert_eq!(notification.title.as_deref(), Some("Booking Confirmed!"));
        let description = notification.description.unwrap().join("\n");
        for needle in ["Ana", "12:30", "4", "1/10/2025"] {
            assert!(description.contains(needle), "missing {needle} in {description}");
        }
    }

    #[test]
    fn test_draft_serializes_for_logging() {
        let form = filled_form();
        let json = serde_json::to_value(form.draft()).unwrap();
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["date"], "2025-01-10");
        assert_eq!(json["time"], "12:30");
        assert_eq!(json["guests"], 4);
    }
}
