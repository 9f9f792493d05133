use std::sync::Arc;

use tracing::debug;

use crate::domain::User;

/// Memoized count of active users, keyed on the identity of the user
/// sequence.
///
/// A draft edit reuses the previous sequence allocation, so the cached count
/// survives it; only a transition that rebuilds the sequence invalidates the
/// cache.
#[derive(Debug, Default)]
pub struct ActiveCount {
    cached: Option<(Arc<[User]>, usize)>,
    recomputes: u64,
}

impl ActiveCount {
    pub fn get(&mut self, users: &Arc<[User]>) -> usize {
        if let Some((key, count)) = &self.cached {
            if Arc::ptr_eq(key, users) {
                return *count;
            }
        }

        debug!("Counting active users");
        let count = users.iter().filter(|user| user.active).count();
        self.recomputes += 1;
        self.cached = Some((Arc::clone(users), count));
        count
    }

    /// How many times the count was actually rescanned.
    #[cfg(test)]
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}
