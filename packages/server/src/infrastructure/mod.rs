//! Infrastructure layer: document store implementations and DTOs.

pub mod dto;
pub mod repository;
