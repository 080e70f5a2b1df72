//! Document store implementations of the domain repository traits.
//!
//! - `inmemory`: process-local collections guarded by a tokio `Mutex`

pub mod inmemory;

pub use inmemory::{InMemoryMessageRepository, InMemoryParticipantRepository};
