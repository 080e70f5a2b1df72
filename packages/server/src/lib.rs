//! Presence-tracking chat backend library.
//!
//! Participants register a presence record, exchange public and private
//! messages over HTTP, and are evicted after a period of inactivity.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
