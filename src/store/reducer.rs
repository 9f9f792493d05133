use super::action::Action;
use super::state::RosterState;

/// Pure transition function: `(state, action) -> state`.
///
/// Total over every action and never panics. Create appends at the end of the
/// sequence; toggle and remove preserve the relative order of untouched users
/// and apply to *all* users matching the id (map/filter semantics), so a
/// duplicated id never leaves a half-applied transition behind.
pub fn reduce(state: &RosterState, action: Action) -> RosterState {
    match action {
        Action::ChangeInput { field, value } => {
            state.produce(|next| next.draft_mut().set(field, value))
        }
        Action::CreateUser { user } => state.produce(|next| {
            next.users_mut().push(user);
            next.draft_mut().reset();
        }),
        Action::ToggleUser { id } => state.produce(|next| {
            for user in next.users_mut() {
                if user.id == id {
                    user.active = !user.active;
                }
            }
        }),
        Action::RemoveUser { id } => state.produce(|next| {
            next.users_mut().retain(|user| user.id != id);
        }),
        Action::Noop => state.clone(),
    }
}
