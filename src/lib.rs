//! Fyyur - client-side tooling for the Fyyur venue site
//!
//! This library provides the scripted parts of the venue pages: loose parsing
//! of the date strings the server renders, display formatting for show times,
//! and the venue delete button that calls the server and redirects the page.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Venue backend trait and the HTTP implementation
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//! * [`ui`] - Page model, navigation and components
//! * [`utils`] - Date parsing and formatting helpers

/// Backend abstraction layer and HTTP client
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup on top of the `log` facade
pub mod logger;

/// Page model and interactive components
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use utils::datetime::parse_iso_string;
