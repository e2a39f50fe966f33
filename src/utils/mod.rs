//! Utility modules for the Fyyur client.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Loose date parsing, strict validation and display formatting

pub mod datetime;
