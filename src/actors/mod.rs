use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::clients::RosterClient;
use crate::domain::{DraftField, User, UserId};
use crate::error::RosterError;
use crate::messages::{RosterRequest, ServiceResponse};
use crate::store::{reduce, Action, ActiveCount, IdAllocator, RosterState};

/// The single writer over the roster state.
///
/// Owns the current [`RosterState`], the id allocator, and the memoized
/// active count. Every mutation funnels through [`RosterService::apply`], the
/// one call site of the reducer, so change detection stays a value comparison
/// and no reader ever observes a half-applied transition. Messages are
/// processed to completion one at a time, which is all the synchronization
/// the store needs.
pub struct RosterService {
    receiver: mpsc::Receiver<RosterRequest>,
    state: RosterState,
    next_id: IdAllocator,
    active_count: ActiveCount,
}

impl RosterService {
    /// Service over the canonical seed state.
    pub fn new(buffer_size: usize) -> (Self, RosterClient) {
        Self::with_state(buffer_size, RosterState::seeded())
    }

    /// Service over an arbitrary starting state. The allocator picks up past
    /// whatever ids the state already holds.
    pub fn with_state(buffer_size: usize, state: RosterState) -> (Self, RosterClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            next_id: IdAllocator::starting_after(state.users()),
            state,
            active_count: ActiveCount::default(),
        };
        let client = RosterClient::new(sender);
        (service, client)
    }

    /// Main service loop. Delegates each message to a handler; one message is
    /// fully processed before the next is received.
    #[instrument(name = "roster_service", skip(self))]
    pub async fn run(mut self) {
        info!("RosterService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RosterRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                RosterRequest::Dispatch { action, respond_to } => {
                    self.handle_dispatch(action, respond_to);
                }
                RosterRequest::ChangeInput {
                    field,
                    value,
                    respond_to,
                } => {
                    self.handle_change_input(field, value, respond_to);
                }
                RosterRequest::CreateUser { respond_to } => {
                    self.handle_create_user(respond_to);
                }
                RosterRequest::ToggleUser { id, respond_to } => {
                    self.handle_toggle_user(id, respond_to);
                }
                RosterRequest::RemoveUser { id, respond_to } => {
                    self.handle_remove_user(id, respond_to);
                }
                RosterRequest::ActiveCount { respond_to } => {
                    self.handle_active_count(respond_to);
                }
                RosterRequest::Shutdown => {
                    info!("RosterService shutting down");
                    break;
                }
                #[cfg(test)]
                RosterRequest::UserCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.users().len()));
                }
            }
        }

        info!("RosterService stopped");
    }

    /// The one write path: run the reducer and swap in the result.
    fn apply(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_snapshot(&self, respond_to: ServiceResponse<RosterState, RosterError>) {
        debug!("Processing snapshot request");
        let _ = respond_to.send(Ok(self.state.clone()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_dispatch(
        &mut self,
        action: Action,
        respond_to: ServiceResponse<RosterState, RosterError>,
    ) {
        debug!("Processing dispatch request");
        self.apply(action);
        let _ = respond_to.send(Ok(self.state.clone()));
    }

    #[instrument(fields(field = ?field), skip(self, value, respond_to))]
    fn handle_change_input(
        &mut self,
        field: DraftField,
        value: String,
        respond_to: ServiceResponse<(), RosterError>,
    ) {
        debug!("Processing change_input request");
        self.apply(Action::ChangeInput { field, value });
        let _ = respond_to.send(Ok(()));
    }

    /// Builds the user from the current draft and the allocator, then
    /// dispatches the fully-formed record. The allocator bump happens outside
    /// the state swap, so it alone never invalidates a reader.
    #[instrument(skip(self, respond_to))]
    fn handle_create_user(&mut self, respond_to: ServiceResponse<User, RosterError>) {
        debug!("Processing create_user request");

        let draft = self.state.draft().clone();
        let user = User::new(self.next_id.next(), draft.username, draft.email);
        self.apply(Action::CreateUser { user: user.clone() });

        info!(user_id = user.id, username = %user.username, "User created");
        let _ = respond_to.send(Ok(user));
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_toggle_user(&mut self, id: UserId, respond_to: ServiceResponse<(), RosterError>) {
        debug!("Processing toggle_user request");

        self.apply(Action::ToggleUser { id });

        match self.state.users().iter().find(|u| u.id == id) {
            Some(user) => info!(active = user.active, "User toggled"),
            None => debug!("No user matched, state unchanged by value"),
        }
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_remove_user(&mut self, id: UserId, respond_to: ServiceResponse<(), RosterError>) {
        debug!("Processing remove_user request");

        self.apply(Action::RemoveUser { id });

        info!(remaining = self.state.users().len(), "User removed");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_active_count(&mut self, respond_to: ServiceResponse<usize, RosterError>) {
        debug!("Processing active_count request");

        let count = self.active_count.get(self.state.users());
        let _ = respond_to.send(Ok(count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Draft;

    fn start() -> RosterClient {
        let (service, client) = RosterService::new(10);
        tokio::spawn(service.run());
        client
    }

    #[tokio::test]
    async fn create_from_draft_appends_park_and_resets_the_draft(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let client = start();

        client
            .change_input(DraftField::Username, "park".to_string())
            .await?;
        client
            .change_input(DraftField::Email, "park@test.com".to_string())
            .await?;
        let created = client.create_user().await?;

        assert_eq!(created, User::new(4, "park", "park@test.com"));

        let state = client.snapshot().await?;
        assert_eq!(state.users().len(), 4);
        assert_eq!(state.users().last(), Some(&created));
        assert_eq!(state.draft(), &Draft::default());
        // park starts inactive, so the count is still just jin.
        assert_eq!(client.active_count().await?, 1);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn toggle_activates_kim_and_bumps_the_count() -> Result<(), Box<dyn std::error::Error>> {
        let client = start();

        client.toggle_user(2).await?;

        let state = client.snapshot().await?;
        let flags: Vec<_> = state.users().iter().map(|u| (u.id, u.active)).collect();
        assert_eq!(flags, vec![(1, true), (2, true), (3, false)]);
        assert_eq!(client.active_count().await?, 2);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn removing_the_only_active_user_zeroes_the_count(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let client = start();

        client.remove_user(1).await?;

        let state = client.snapshot().await?;
        let ids: Vec<_> = state.users().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(client.active_count().await?, 0);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn raw_noop_dispatch_returns_the_same_state() -> Result<(), Box<dyn std::error::Error>> {
        let client = start();

        let before = client.snapshot().await?;
        let after = client.dispatch(Action::Noop).await?;
        assert_eq!(after, before);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn user_count_tracks_creates_and_removes() -> Result<(), Box<dyn std::error::Error>> {
        let client = start();

        assert_eq!(client.user_count().await?, 3);
        client.create_user().await?;
        assert_eq!(client.user_count().await?, 4);
        client.remove_user(2).await?;
        assert_eq!(client.user_count().await?, 3);

        client.shutdown().await?;
        Ok(())
    }

    #[tokio::test]
    async fn allocator_skips_ids_already_in_a_custom_state(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let state = RosterState::new(
            Draft::default(),
            vec![User::new(10, "solo", "solo@test.com")],
        );
        let (service, client) = RosterService::with_state(10, state);
        tokio::spawn(service.run());

        let created = client.create_user().await?;
        assert_eq!(created.id, 11);

        client.shutdown().await?;
        Ok(())
    }
}
