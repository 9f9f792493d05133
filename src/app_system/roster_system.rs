use tracing::{error, info, instrument};

use crate::actors::RosterService;
use crate::clients::RosterClient;
use crate::error::RosterError;

/// Owns the running roster store: spawns the service task, hands out the
/// client, and tears the task down on shutdown.
pub struct RosterSystem {
    pub client: RosterClient,
    handle: tokio::task::JoinHandle<()>,
}

impl Default for RosterSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterSystem {
    #[instrument(name = "roster_system")]
    pub fn new() -> Self {
        info!("Starting roster system");

        let (service, client) = RosterService::new(32);
        let handle = tokio::spawn(service.run());

        info!("Roster system started");
        Self { client, handle }
    }

    /// Gracefully stop the service and wait for the task to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), RosterError> {
        info!("Shutting down roster system");

        self.client.shutdown().await?;
        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service task failed");
            return Err(RosterError::ActorCommunicationError(e.to_string()));
        }

        info!("Roster system shutdown complete");
        Ok(())
    }
}
