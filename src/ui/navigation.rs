//! Navigation targets and the navigator abstraction

use std::sync::{Arc, Mutex};

use crate::backend::VenueId;
use crate::constants::{HOME_PATH, VENUES_PATH_SEGMENT};

/// Where the page goes after an action completes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Site root
    Home,
    /// The venue's own page
    Venue(VenueId),
}

impl Redirect {
    pub fn path(&self) -> String {
        match self {
            Redirect::Home => HOME_PATH.to_string(),
            Redirect::Venue(id) => format!("/{}/{}", VENUES_PATH_SEGMENT, id),
        }
    }
}

/// Performs full-page navigation, replacing the current history entry.
pub trait Navigator: Send + Sync {
    fn replace(&self, location: &str);
}

/// Navigator that prints the target location to stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn replace(&self, location: &str) {
        println!("→ {}", location);
    }
}

/// Navigator that remembers every location it was sent to.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    history: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All locations so far, oldest first
    pub fn history(&self) -> Vec<String> {
        if let Ok(history) = self.history.lock() {
            history.clone()
        } else {
            Vec::new()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.history().pop()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, location: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.push(location.to_string());
        }
    }
}
