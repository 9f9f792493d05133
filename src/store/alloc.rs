use crate::domain::{User, UserId};

/// Monotonic id counter, owned by the service *next to* the state rather than
/// inside it: handing out an id must not produce a new state value.
///
/// Single-writer, single-reader within one service's lifetime, so a plain
/// integer suffices.
#[derive(Debug)]
pub struct IdAllocator {
    next: UserId,
}

impl IdAllocator {
    /// Starts one past the highest id already present in `seed`.
    pub fn starting_after(seed: &[User]) -> Self {
        Self {
            next: seed.iter().map(|user| user.id).max().unwrap_or(0) + 1,
        }
    }

    /// Returns the current counter value and increments it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> UserId {
        let id = self.next;
        self.next += 1;
        id
    }
}
