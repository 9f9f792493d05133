use tokio::sync::oneshot;

use crate::domain::{DraftField, User, UserId};
use crate::error::RosterError;
use crate::store::{Action, RosterState};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the roster service. Each variant carries its parameters
/// and a oneshot channel for the response.
///
/// The convenience variants (`ChangeInput`, `ToggleUser`, `RemoveUser`) mirror
/// the input events a view would emit; `Dispatch` takes a raw [`Action`] and
/// exists so callers can exercise the full transition contract, identity
/// fallback included.
#[derive(Debug)]
pub enum RosterRequest {
    /// Read the current state.
    Snapshot {
        respond_to: ServiceResponse<RosterState, RosterError>,
    },
    /// Apply a raw action and return the resulting state.
    Dispatch {
        action: Action,
        respond_to: ServiceResponse<RosterState, RosterError>,
    },
    /// Overwrite one draft field.
    ChangeInput {
        field: DraftField,
        value: String,
        respond_to: ServiceResponse<(), RosterError>,
    },
    /// Materialize the draft into a new user and append it.
    CreateUser {
        respond_to: ServiceResponse<User, RosterError>,
    },
    ToggleUser {
        id: UserId,
        respond_to: ServiceResponse<(), RosterError>,
    },
    RemoveUser {
        id: UserId,
        respond_to: ServiceResponse<(), RosterError>,
    },
    /// Memoized count of users with `active = true`.
    ActiveCount {
        respond_to: ServiceResponse<usize, RosterError>,
    },
    Shutdown,
    #[cfg(test)]
    UserCount {
        respond_to: ServiceResponse<usize, RosterError>,
    },
}
