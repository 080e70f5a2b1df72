//! Shared utilities for Lounge packages.

pub mod logger;
pub mod time;
