//! Presence-tracking chat server.
//!
//! Participants register, exchange public/private messages over HTTP and are
//! evicted after a period of inactivity.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin lounge-server
//! cargo run --bin lounge-server -- --host 0.0.0.0 --port 5000 --inactivity-timeout-secs 15
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use lounge_server::{
    config::{DEFAULT_HOST, DEFAULT_INACTIVITY_TIMEOUT_SECS, DEFAULT_PORT, ServerConfig},
    infrastructure::repository::{InMemoryMessageRepository, InMemoryParticipantRepository},
    ui::Server,
};
use lounge_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "lounge-server")]
#[command(about = "Chat server with presence tracking and inactivity eviction", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Seconds without heartbeat before a participant is evicted (also the sweep period)
    #[arg(short = 't', long, default_value_t = DEFAULT_INACTIVITY_TIMEOUT_SECS,
          value_parser = clap::value_parser!(u64).range(1..))]
    inactivity_timeout_secs: u64,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            inactivity_timeout: Duration::from_secs(args.inactivity_timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_PKG_NAME"), env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    // Initialize dependencies in order:
    // 1. Repositories (document store)
    // 2. Clock
    // 3. Server (use cases + sweeper)

    // 1. Create Repositories (in-memory document store)
    let participant_repository = Arc::new(InMemoryParticipantRepository::new());
    let message_repository = Arc::new(InMemoryMessageRepository::new());

    // 2. Create Clock
    let clock = Arc::new(SystemClock);

    // 3. Create and run the server
    let server = Server::new(
        participant_repository,
        message_repository,
        clock,
        config.inactivity_timeout,
    );
    if let Err(e) = server.run(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
