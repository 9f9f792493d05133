//! The pure core of the roster store: immutable state values, tagged actions,
//! the transition function, the id allocator, and the memoized derived count.
//!
//! Nothing in this module does I/O or touches a channel; the actor layer in
//! [`crate::actors`] is the only writer that drives it.

pub mod action;
pub mod alloc;
pub mod memo;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use alloc::IdAllocator;
pub use memo::ActiveCount;
pub use reducer::reduce;
pub use state::RosterState;
