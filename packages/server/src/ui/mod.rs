//! HTTP surface and background tasks.

mod error;
mod handler;
mod server;
mod signal;
pub mod state;
mod sweeper;

pub use error::ApiError;
pub use server::Server;
pub use sweeper::spawn_inactivity_sweeper;
