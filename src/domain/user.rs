/// Identifier assigned to every user in the roster. Unique within the
/// sequence at all times; handed out by the service's id allocator.
pub type UserId = u32;

/// A managed user record: identity, display fields, and an active flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub active: bool,
}

impl User {
    /// Creates a new, inactive user. Only a toggle flips `active`.
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            active: false,
        }
    }
}

/// The fixture roster every store starts from. `jin` is the only active user.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            username: "jin".to_string(),
            email: "jin@test.com".to_string(),
            active: true,
        },
        User::new(2, "kim", "kim@test.com"),
        User::new(3, "lee", "lee@test.com"),
    ]
}
