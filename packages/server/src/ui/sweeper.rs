//! Background task that evicts inactive participants.

use std::{sync::Arc, time::Duration};

use tokio::{
    task::{AbortHandle, JoinHandle},
    time::{Instant, MissedTickBehavior},
};

use crate::usecase::{EvictError, EvictInactiveParticipantsUseCase};

/// Spawn the recurring eviction sweep.
///
/// The first sweep runs one `period` after startup. Each sweep runs in its own
/// task so that a panic inside it is logged and the timer keeps going. The
/// returned handle runs until aborted or the runtime shuts down. Aborting it
/// also aborts a sweep that is still in flight.
pub fn spawn_inactivity_sweeper(
    usecase: Arc<EvictInactiveParticipantsUseCase>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!("Inactivity sweeper started (period: {:?})", period);

        loop {
            interval.tick().await;

            let usecase = usecase.clone();
            let sweep = tokio::spawn(async move { usecase.execute().await });
            let _in_flight = AbortOnDrop(sweep.abort_handle());
            match sweep.await {
                Ok(Ok(report)) => {
                    if !report.evicted.is_empty() || report.failed > 0 {
                        tracing::info!(
                            evicted = report.evicted.len(),
                            failed = report.failed,
                            "Inactivity sweep finished"
                        );
                    }
                }
                Ok(Err(EvictError::AlreadyRunning)) => {
                    tracing::warn!("Previous inactivity sweep still running, skipping");
                }
                Ok(Err(e)) => {
                    tracing::error!("Inactivity sweep failed: {}", e);
                }
                Err(e) => {
                    tracing::error!("Inactivity sweep task aborted: {}", e);
                }
            }
        }
    })
}

/// Aborts the sweep task when the sweeper loop itself is dropped
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
