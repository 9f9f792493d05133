//! Utilities for testing the client in isolation.
//!
//! Instead of spinning up a full [`RosterService`](crate::actors::RosterService),
//! tests can create a mock client whose requests land on a channel they
//! control, then assert on the messages and answer them deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::clients::RosterClient;
use crate::domain::{User, UserId};
use crate::error::RosterError;
use crate::messages::RosterRequest;
use crate::store::Action;

/// Creates a mock client and the receiver its requests arrive on.
pub fn create_mock_client(buffer_size: usize) -> (RosterClient, mpsc::Receiver<RosterRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RosterClient::new(sender), receiver)
}

/// Asserts that the next message is a raw dispatch.
pub async fn expect_dispatch(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<(
    Action,
    oneshot::Sender<Result<crate::store::RosterState, RosterError>>,
)> {
    match receiver.recv().await {
        Some(RosterRequest::Dispatch { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is a toggle.
pub async fn expect_toggle(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<(UserId, oneshot::Sender<Result<(), RosterError>>)> {
    match receiver.recv().await {
        Some(RosterRequest::ToggleUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is a create.
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<RosterRequest>,
) -> Option<oneshot::Sender<Result<User, RosterError>>> {
    match receiver.recv().await {
        Some(RosterRequest::CreateUser { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggle_request_carries_the_target_id() {
        let (client, mut receiver) = create_mock_client(10);

        let toggle_task = tokio::spawn(async move { client.toggle_user(2).await });

        let (id, responder) = expect_toggle(&mut receiver)
            .await
            .expect("Expected Toggle request");
        assert_eq!(id, 2);
        responder.send(Ok(())).unwrap();

        assert_eq!(toggle_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn create_request_is_answered_with_the_new_user() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move { client.create_user().await });

        let responder = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        let park = User::new(4, "park", "park@test.com");
        responder.send(Ok(park.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(park));
    }

    #[tokio::test]
    async fn raw_dispatch_forwards_the_action_unchanged() {
        let (client, mut receiver) = create_mock_client(10);

        let dispatch_task =
            tokio::spawn(async move { client.dispatch(Action::RemoveUser { id: 1 }).await });

        let (action, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(action, Action::RemoveUser { id: 1 });
        let next = crate::store::RosterState::seeded();
        responder.send(Ok(next.clone())).unwrap();

        assert_eq!(dispatch_task.await.unwrap(), Ok(next));
    }

    #[tokio::test]
    async fn dropping_the_receiver_surfaces_a_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.dispatch(Action::Noop).await;
        assert_eq!(
            result,
            Err(RosterError::ActorCommunicationError(
                "Store closed".to_string()
            ))
        );
    }
}
