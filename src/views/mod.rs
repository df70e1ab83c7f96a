pub mod booking_form;
pub mod main_layout;
