use thiserror::Error;

/// Errors surfaced by the roster store.
///
/// Dispatching an unrecognized action is *not* an error: the reducer falls
/// back to the identity transition. Only channel failures and malformed
/// input-boundary payloads end up here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RosterError {
    #[error("Unknown draft field: {0}")]
    UnknownField(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
