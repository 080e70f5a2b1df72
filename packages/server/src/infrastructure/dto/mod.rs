//! Data Transfer Objects (DTOs) for the chat application.
//!
//! - `http`: HTTP API request and response bodies
//! - `conversion`: DTO ⇔ domain model conversions (validation happens here)

pub mod conversion;
pub mod http;
