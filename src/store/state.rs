use std::sync::Arc;

use crate::domain::{seed_users, Draft, User};

/// Immutable snapshot of the whole store: the draft under edit plus the
/// ordered user sequence.
///
/// The sequence is an `Arc<[User]>` so a transition that never touches it
/// hands the *same* allocation to the next state. Readers detect change by
/// pointer identity (`Arc::ptr_eq`); the memoized active count keys on
/// exactly that comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    draft: Draft,
    users: Arc<[User]>,
}

impl RosterState {
    pub fn new(draft: Draft, users: Vec<User>) -> Self {
        Self {
            draft,
            users: users.into(),
        }
    }

    /// The canonical starting state: empty draft, three seed users.
    pub fn seeded() -> Self {
        Self::new(Draft::default(), seed_users())
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn users(&self) -> &Arc<[User]> {
        &self.users
    }

    /// Copy-on-write edit: hands a builder over this state to `edit` and
    /// commits the result as a new value. A field the closure never asks for
    /// mutably is reused as-is, so an edit confined to the draft keeps the
    /// user sequence pointer-identical.
    pub fn produce(&self, edit: impl FnOnce(&mut StateBuilder<'_>)) -> Self {
        let mut builder = StateBuilder {
            base: self,
            draft: None,
            users: None,
        };
        edit(&mut builder);
        builder.commit()
    }
}

/// Scoped mutable view over a [`RosterState`], materialized lazily on first
/// mutable access to each field.
pub struct StateBuilder<'a> {
    base: &'a RosterState,
    draft: Option<Draft>,
    users: Option<Vec<User>>,
}

impl StateBuilder<'_> {
    pub fn draft_mut(&mut self) -> &mut Draft {
        self.draft.get_or_insert_with(|| self.base.draft.clone())
    }

    pub fn users_mut(&mut self) -> &mut Vec<User> {
        self.users.get_or_insert_with(|| self.base.users.to_vec())
    }

    fn commit(self) -> RosterState {
        RosterState {
            draft: self.draft.unwrap_or_else(|| self.base.draft.clone()),
            users: self
                .users
                .map(Arc::from)
                .unwrap_or_else(|| Arc::clone(&self.base.users)),
        }
    }
}
