mod actors;
mod app_system;
mod clients;
mod domain;
mod error;
mod messages;
mod store;

#[cfg(test)]
mod mock_framework;

use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, RosterSystem};
use crate::domain::DraftField;
use crate::error::RosterError;
use crate::store::Action;

/// Demo driver: walks the seeded roster through a create, a toggle, a remove,
/// and an unrecognized action, reading the memoized active count along the
/// way.
#[tokio::main]
async fn main() -> Result<(), RosterError> {
    setup_tracing();

    info!("Starting roster store demo");
    let system = RosterSystem::new();
    let client = system.client.clone();

    let state = client.snapshot().await?;
    info!(
        users = state.users().len(),
        active = client.active_count().await?,
        "Seed roster loaded"
    );

    // Type a new user into the draft field by field, then create it.
    let span = tracing::info_span!("user_creation");
    let created = async {
        client
            .change_input(DraftField::Username, "park".to_string())
            .await?;
        client
            .change_input(DraftField::Email, "park@test.com".to_string())
            .await?;
        client.create_user().await
    }
    .instrument(span)
    .await?;
    info!(user_id = created.id, username = %created.username, "User created from draft");

    client.toggle_user(2).await?;
    info!(
        active = client.active_count().await?,
        "Toggled user 2 active"
    );

    client.remove_user(1).await?;
    info!(active = client.active_count().await?, "Removed user 1");

    // Unrecognized input events fall back to the identity transition.
    let before = client.snapshot().await?;
    let after = client.dispatch(Action::Noop).await?;
    let unchanged = before == after;
    info!(unchanged, "Dispatched unrecognized action");

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
