//! Page components

pub mod venue_delete_button;

pub use venue_delete_button::VenueDeleteButton;
