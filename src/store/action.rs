use crate::domain::{DraftField, User, UserId};

/// A tagged description of an intended state change.
///
/// Every variant maps to one arm of [`reduce`](super::reduce). There is
/// deliberately no error channel here: the reducer is total, and an action it
/// does not recognize ([`Action::Noop`]) leaves the state untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Overwrite one field of the draft.
    ChangeInput { field: DraftField, value: String },
    /// Append a fully-formed user to the sequence and reset the draft.
    CreateUser { user: User },
    /// Flip `active` on every user matching `id`.
    ToggleUser { id: UserId },
    /// Delete every user matching `id`.
    RemoveUser { id: UserId },
    /// Identity transition for unrecognized input events.
    Noop,
}
