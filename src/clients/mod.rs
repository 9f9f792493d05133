use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{DraftField, User, UserId};
use crate::error::RosterError;
use crate::messages::RosterRequest;
use crate::store::{Action, RosterState};

/// Generate client methods with oneshot channel boilerplate and automatic
/// tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            #[allow(dead_code)]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, RosterError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| RosterError::ActorCommunicationError("Store closed".to_string()))?;

                response
                    .await
                    .map_err(|_| RosterError::ActorCommunicationError("Store dropped".to_string()))?
            }
        }
    };
}

/// Clonable handle for the roster service: the dispatcher passed around as an
/// explicit value rather than looked up from ambient context. Thin wrapper
/// around the message channel with macro-generated methods.
#[derive(Clone)]
pub struct RosterClient {
    sender: mpsc::Sender<RosterRequest>,
}

impl RosterClient {
    pub fn new(sender: mpsc::Sender<RosterRequest>) -> Self {
        Self { sender }
    }

    /// Manual method: shutdown carries no response channel.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), RosterError> {
        debug!("Sending shutdown request");
        self.sender
            .send(RosterRequest::Shutdown)
            .await
            .map_err(|_| RosterError::ActorCommunicationError("Store closed".to_string()))?;
        Ok(())
    }
}

client_method!(RosterClient => fn snapshot() -> RosterState as RosterRequest::Snapshot);
client_method!(RosterClient => fn dispatch(action: Action) -> RosterState as RosterRequest::Dispatch);
client_method!(RosterClient => fn change_input(field: DraftField, value: String) -> () as RosterRequest::ChangeInput);
client_method!(RosterClient => fn create_user() -> User as RosterRequest::CreateUser);
client_method!(RosterClient => fn toggle_user(id: UserId) -> () as RosterRequest::ToggleUser);
client_method!(RosterClient => fn remove_user(id: UserId) -> () as RosterRequest::RemoveUser);
client_method!(RosterClient => fn active_count() -> usize as RosterRequest::ActiveCount);

// Test-only method for internal state inspection without a full snapshot.
#[cfg(test)]
client_method!(RosterClient => fn user_count() -> usize as RosterRequest::UserCount);
