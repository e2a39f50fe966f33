use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use fyyur::backend::{BackendError, DeleteOutcome, VenueBackend, VenueId};
use fyyur::ui::{ClickEvent, Element, Page, PageError, RecordingNavigator, Redirect, VenueDeleteButton};

#[derive(Clone, Copy)]
enum Reply {
    Success(bool),
    NetworkError,
    InvalidJson,
}

struct MockBackend {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl MockBackend {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl VenueBackend for MockBackend {
    fn backend_type(&self) -> &str {
        "mock"
    }

    async fn delete_venue(&self, venue_id: &VenueId) -> Result<DeleteOutcome, BackendError> {
        self.requests.lock().unwrap().push(venue_id.to_string());
        match self.reply {
            Reply::Success(success) => Ok(DeleteOutcome { success }),
            Reply::NetworkError => Err(BackendError::Network("connection refused".to_string())),
            Reply::InvalidJson => Err(BackendError::InvalidData("expected value".to_string())),
        }
    }
}

fn venue_page(id: &str) -> Page {
    Page::new(vec![
        Element::new("venue-name"),
        Element::new("venue-delete-btn").with_data("id", id),
    ])
}

fn attach(page: &Page, backend: Arc<MockBackend>) -> (VenueDeleteButton, RecordingNavigator) {
    let navigator = RecordingNavigator::new();
    let button = VenueDeleteButton::attach(page, backend, Arc::new(navigator.clone())).unwrap();
    (button, navigator)
}

#[tokio::test]
async fn test_successful_delete_goes_home() {
    let backend = MockBackend::new(Reply::Success(true));
    let (button, navigator) = attach(&venue_page("42"), backend.clone());

    let redirect = button.click().await.unwrap();

    assert_eq!(redirect, Redirect::Home);
    assert_eq!(navigator.history(), vec!["/"]);
    assert_eq!(backend.requests(), vec!["42"]);
}

#[tokio::test]
async fn test_refused_delete_returns_to_venue() {
    let backend = MockBackend::new(Reply::Success(false));
    let (button, navigator) = attach(&venue_page("42"), backend.clone());

    let redirect = button.click().await.unwrap();

    assert_eq!(redirect, Redirect::Venue(VenueId::new("42")));
    assert_eq!(navigator.history(), vec!["/venues/42"]);
    assert_eq!(backend.requests(), vec!["42"]);
}

#[tokio::test]
async fn test_network_error_returns_to_venue() {
    let backend = MockBackend::new(Reply::NetworkError);
    let (button, navigator) = attach(&venue_page("42"), backend.clone());

    let redirect = button.click().await.unwrap();

    assert_eq!(redirect, Redirect::Venue(VenueId::new("42")));
    assert_eq!(navigator.history(), vec!["/venues/42"]);
}

#[tokio::test]
async fn test_invalid_body_returns_to_venue() {
    let backend = MockBackend::new(Reply::InvalidJson);
    let (button, navigator) = attach(&venue_page("42"), backend);

    button.click().await.unwrap();

    assert_eq!(navigator.last().as_deref(), Some("/venues/42"));
}

#[test]
fn test_attach_requires_button() {
    let page = Page::new(vec![Element::new("venue-name")]);
    let result = VenueDeleteButton::attach(
        &page,
        MockBackend::new(Reply::Success(true)),
        Arc::new(RecordingNavigator::new()),
    );

    assert_eq!(
        result.err(),
        Some(PageError::ElementNotFound("venue-delete-btn".to_string()))
    );
}

#[tokio::test]
async fn test_click_on_nested_element_uses_button_id() {
    let backend = MockBackend::new(Reply::Success(true));
    let (button, navigator) = attach(&venue_page("7"), backend.clone());

    let event = ClickEvent {
        target: Element::anonymous(),
        current_target: button.element().clone(),
    };
    button.handle_click(&event).await.unwrap();

    assert_eq!(backend.requests(), vec!["7"]);
    assert_eq!(navigator.history(), vec!["/"]);
}

#[tokio::test]
async fn test_click_target_id_takes_precedence() {
    let backend = MockBackend::new(Reply::Success(false));
    let (button, navigator) = attach(&venue_page("7"), backend.clone());

    let event = ClickEvent {
        target: Element::anonymous().with_data("id", "8"),
        current_target: button.element().clone(),
    };
    button.handle_click(&event).await.unwrap();

    assert_eq!(backend.requests(), vec!["8"]);
    assert_eq!(navigator.history(), vec!["/venues/8"]);
}

#[tokio::test]
async fn test_missing_id_sends_nothing() {
    let backend = MockBackend::new(Reply::Success(true));
    let page = Page::new(vec![Element::new("venue-delete-btn")]);
    let (button, navigator) = attach(&page, backend.clone());

    let result = button.click().await;

    assert_eq!(result, Err(PageError::MissingDataAttribute("id".to_string())));
    assert!(backend.requests().is_empty());
    assert!(navigator.history().is_empty());
}

#[tokio::test]
async fn test_each_click_sends_its_own_request() {
    let backend = MockBackend::new(Reply::Success(false));
    let (button, navigator) = attach(&venue_page("42"), backend.clone());

    let (first, second) = tokio::join!(button.click(), button.click());

    assert!(first.is_ok() && second.is_ok());
    assert_eq!(backend.requests(), vec!["42", "42"]);
    assert_eq!(navigator.history(), vec!["/venues/42", "/venues/42"]);
}

#[test]
fn test_redirect_paths() {
    assert_eq!(Redirect::Home.path(), "/");
    assert_eq!(Redirect::Venue(VenueId::new("42")).path(), "/venues/42");
}
