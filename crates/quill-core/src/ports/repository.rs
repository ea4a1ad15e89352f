use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostDraft, User, UserDraft};
use crate::error::RepoError;

/// Post repository - the authoritative owner of all post state.
///
/// Lookups signal absence with `None` rather than an error; only the
/// backing store failing is an error. Implementations running on a
/// multi-threaded executor must serialize `create` and `like` against
/// each other so ids stay unique and like counts stay monotonic.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first. `category` filters case-insensitively
    /// unless it is the `"All"` sentinel; `limit` truncates the result.
    async fn list(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Posts flagged as featured, newest first.
    async fn featured(&self) -> Result<Vec<Post>, RepoError>;

    /// Case-insensitive substring search over title, excerpt, and
    /// category. Unranked.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError>;

    /// Store a new post and return it with its server-assigned fields.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Increment a post's like count by one. Silently does nothing when
    /// the id is unknown; callers decide whether that warrants surfacing.
    async fn like(&self, id: Uuid) -> Result<(), RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Find a user by their username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Store a new user and return it with its server-assigned ID.
    async fn create(&self, draft: UserDraft) -> Result<User, RepoError>;
}
