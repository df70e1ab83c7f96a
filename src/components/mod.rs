mod date_picker;
mod form_input;
mod guest_selector;
mod submit_button;
mod time_slot_selector;
pub mod toast;
pub mod ui;

pub use date_picker::DatePicker;
pub use form_input::FormInput;
pub use guest_selector::GuestSelector;
pub use submit_button::SubmitButton;
pub use time_slot_selector::TimeSlotSelector;

pub use toast::ToastViewport;
