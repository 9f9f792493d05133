use std::str::FromStr;

use crate::error::RosterError;

/// In-progress input for a user that has not been created yet. Reset to empty
/// strings immediately after a successful create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub username: String,
    pub email: String,
}

impl Draft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Username => self.username = value,
            DraftField::Email => self.email = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The editable fields of a [`Draft`], addressable by name at the input
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Username,
    Email,
}

impl FromStr for DraftField {
    type Err = RosterError;

    /// Field names arrive as strings from input events. An unknown name is a
    /// caller contract violation and is rejected here rather than tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            other => Err(RosterError::UnknownField(other.to_string())),
        }
    }
}
