use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity. No authentication flow is wired up yet; the credential
/// field is stored opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Caller-supplied fields for a new user.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub password: String,
}

impl User {
    /// Create a new user with a generated ID.
    pub fn new(draft: UserDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: draft.username,
            password: draft.password,
        }
    }
}
