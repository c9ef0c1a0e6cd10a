use {
    super::Service,
    crate::server::{
        EXIT_CHECK_INTERVAL,
        SHOULD_EXIT,
    },
    anyhow::Result,
    std::sync::atomic::Ordering,
};

impl Service {
    /// One lifecycle tick: start due auctions, end due auctions, then
    /// re-drive any settlement stranded by an earlier failure. Scans
    /// re-read state from the store every time, which is what makes the
    /// loop self-healing across partial failures.
    pub async fn run_lifecycle_tick(&self) {
        if let Err(err) = self.start_auctions().await {
            tracing::error!(error = ?err, "Start scan failed");
        }
        if let Err(err) = self.end_auctions().await {
            tracing::error!(error = ?err, "End scan failed");
        }
        if let Err(err) = self.retry_pending_settlements().await {
            tracing::error!(error = ?err, "Settlement retry scan failed");
        }
    }

    pub async fn run_lifecycle_loop(&self) -> Result<()> {
        tracing::info!(
            tick_interval = ?self.config.tick_interval,
            "Starting auction lifecycle scheduler...",
        );
        let mut tick_interval = tokio::time::interval(self.config.tick_interval);
        let mut exit_check_interval = tokio::time::interval(EXIT_CHECK_INTERVAL);

        while !SHOULD_EXIT.load(Ordering::Acquire) {
            tokio::select! {
                _ = tick_interval.tick() => {
                    self.task_tracker.spawn({
                        let service = self.clone();
                        async move {
                            service.run_lifecycle_tick().await;
                        }
                    });
                }
                _ = exit_check_interval.tick() => {}
            }
        }
        tracing::info!("Shutting down auction lifecycle scheduler...");
        Ok(())
    }
}
