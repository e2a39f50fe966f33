//! Constants used throughout the application
//!
//! This module centralizes page contract names, routes, and other constant values.

// Page contract
pub const VENUE_DELETE_BUTTON_ID: &str = "venue-delete-btn";
pub const VENUE_ID_ATTRIBUTE: &str = "id";

// Routes
pub const HOME_PATH: &str = "/";
pub const VENUES_PATH_SEGMENT: &str = "venues";

// Configuration
pub const APP_NAME: &str = "fyyur";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "fyyur.toml";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";

// Logging
pub const LOG_FILE_NAME: &str = "fyyur.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";
