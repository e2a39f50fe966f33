//! Venue delete button component
//!
//! Clicking the button deletes the venue named by the button's `data-id` and
//! replaces the page: the site root on success, the venue's own page otherwise.
//! Each click sends exactly one request and navigates exactly once. Clicks are
//! independent; nothing de-duplicates requests that overlap.

use std::sync::Arc;

use crate::backend::{DeleteOutcome, VenueBackend, VenueId};
use crate::constants::{VENUE_DELETE_BUTTON_ID, VENUE_ID_ATTRIBUTE};
use crate::ui::navigation::{Navigator, Redirect};
use crate::ui::page::{ClickEvent, Element, Page, PageError};

/// Delete button bound to a backend and a navigator
#[derive(Clone)]
pub struct VenueDeleteButton {
    element: Element,
    backend: Arc<dyn VenueBackend>,
    navigator: Arc<dyn Navigator>,
}

impl VenueDeleteButton {
    /// Attach to the `#venue-delete-btn` element of `page`.
    pub fn attach(
        page: &Page,
        backend: Arc<dyn VenueBackend>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, PageError> {
        let element = page
            .get_element_by_id(VENUE_DELETE_BUTTON_ID)
            .cloned()
            .ok_or_else(|| PageError::ElementNotFound(VENUE_DELETE_BUTTON_ID.to_string()))?;

        Ok(Self {
            element,
            backend,
            navigator,
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Click the button itself.
    pub async fn click(&self) -> Result<Redirect, PageError> {
        self.handle_click(&ClickEvent::on(self.element.clone())).await
    }

    /// Handle a click that reached the button, possibly from a nested element.
    ///
    /// Fails without sending anything when no venue id can be found on the
    /// clicked element or the button.
    pub async fn handle_click(&self, event: &ClickEvent) -> Result<Redirect, PageError> {
        let venue_id = event
            .data(VENUE_ID_ATTRIBUTE)
            .map(VenueId::from)
            .ok_or_else(|| PageError::MissingDataAttribute(VENUE_ID_ATTRIBUTE.to_string()))?;

        log::info!("Deleting venue {} via {}", venue_id, self.backend.backend_type());

        // All failures send the user back to the venue page
        let redirect = match self.backend.delete_venue(&venue_id).await {
            Ok(DeleteOutcome { success: true }) => {
                log::info!("Venue {} deleted", venue_id);
                Redirect::Home
            }
            Ok(DeleteOutcome { success: false }) => {
                log::warn!("Server refused to delete venue {}", venue_id);
                Redirect::Venue(venue_id)
            }
            Err(e) => {
                log::warn!("Failed to delete venue {}: {}", venue_id, e);
                Redirect::Venue(venue_id)
            }
        };

        self.navigator.replace(&redirect.path());
        Ok(redirect)
    }
}
