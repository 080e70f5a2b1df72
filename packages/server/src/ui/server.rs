//! Server execution logic.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use lounge_shared::time::Clock;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::ServerConfig,
    domain::{MessageRepository, ParticipantRepository},
    usecase::{
        EvictInactiveParticipantsUseCase, HeartbeatUseCase, ListMessagesUseCase,
        ListParticipantsUseCase, RegisterParticipantUseCase, SendMessageUseCase,
    },
};

use super::{
    handler::{
        health_check, heartbeat, list_messages, list_participants, post_message,
        register_participant,
    },
    signal::shutdown_signal,
    state::AppState,
    sweeper::spawn_inactivity_sweeper,
};

/// Chat server
///
/// Owns the use cases wired to one document store, and runs the HTTP surface
/// together with the inactivity sweeper.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     participant_repository,
///     message_repository,
///     Arc::new(SystemClock),
///     Duration::from_secs(10),
/// );
/// server.run(&ServerConfig::default()).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    /// EvictInactiveParticipantsUseCase（非アクティブ参加者の退室処理）
    evict_inactive_participants_usecase: Arc<EvictInactiveParticipantsUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `participant_repository` - `participants` collection
    /// * `message_repository` - `messages` collection
    /// * `clock` - Time source for activity and message timestamps
    /// * `inactivity_timeout` - Staleness threshold and sweep period
    pub fn new(
        participant_repository: Arc<dyn ParticipantRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        inactivity_timeout: Duration,
    ) -> Self {
        let state = Arc::new(AppState {
            register_participant_usecase: Arc::new(RegisterParticipantUseCase::new(
                participant_repository.clone(),
                message_repository.clone(),
                clock.clone(),
            )),
            list_participants_usecase: Arc::new(ListParticipantsUseCase::new(
                participant_repository.clone(),
            )),
            heartbeat_usecase: Arc::new(HeartbeatUseCase::new(
                participant_repository.clone(),
                clock.clone(),
            )),
            send_message_usecase: Arc::new(SendMessageUseCase::new(
                participant_repository.clone(),
                message_repository.clone(),
                clock.clone(),
            )),
            list_messages_usecase: Arc::new(ListMessagesUseCase::new(message_repository.clone())),
        });
        let evict_inactive_participants_usecase = Arc::new(EvictInactiveParticipantsUseCase::new(
            participant_repository,
            message_repository,
            clock,
            inactivity_timeout,
        ));

        Self {
            state,
            evict_inactive_participants_usecase,
        }
    }

    /// Build the HTTP router
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/participants",
                post(register_participant).get(list_participants),
            )
            .route("/messages", post(post_message).get(list_messages))
            .route("/status", post(heartbeat))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the chat server until Ctrl+C / SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the configured address or
    /// if there's an error during server execution.
    pub async fn run(self, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(config.bind_addr()).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// The inactivity sweeper runs for the lifetime of the server and is
    /// stopped, together with any sweep in flight, once the HTTP server has
    /// drained.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let period = self.evict_inactive_participants_usecase.inactivity_timeout();
        let sweeper =
            spawn_inactivity_sweeper(self.evict_inactive_participants_usecase.clone(), period);

        let app = self.router();
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        sweeper.abort();
        if let Err(e) = sweeper.await
            && !e.is_cancelled()
        {
            tracing::error!("Inactivity sweeper terminated abnormally: {}", e);
        }
        result
    }
}
