//! UI module for Fyyur
//!
//! This module models the parts of the venue pages that scripts interact with:
//! elements and click events ([`page`]), where the browser goes next
//! ([`navigation`]), and the interactive components built on them.

pub mod components;
pub mod navigation;
pub mod page;

pub use components::VenueDeleteButton;
pub use navigation::{ConsoleNavigator, Navigator, RecordingNavigator, Redirect};
pub use page::{ClickEvent, Element, Page, PageError};
