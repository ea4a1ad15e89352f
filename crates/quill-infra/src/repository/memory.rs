//! In-memory repository implementations.
//!
//! Every query is a linear scan over a map. The store is volatile,
//! process-lifetime, and small; indexes would buy nothing here.
//! Note: all data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, PostDraft, User, UserDraft};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::seed;

/// In-memory post repository guarded by an async RwLock.
///
/// Mutations (`create`, `like`) take the write lock, which serializes
/// them with respect to each other under a multi-threaded executor and
/// keeps ids unique and like counts monotonic.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-loaded with the six sample posts.
    pub fn seeded() -> Self {
        let posts = seed::sample_posts()
            .into_iter()
            .map(|post| (post.id, post))
            .collect();
        Self {
            posts: RwLock::new(posts),
        }
    }

    fn sorted_newest_first(posts: &HashMap<Uuid, Post>) -> Vec<Post> {
        let mut result: Vec<Post> = posts.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(
        &self,
        category: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut result = Self::sorted_newest_first(&posts);

        if let Some(category) = category {
            // "All" is a sentinel for "no filter", accepted in any casing.
            if !category.eq_ignore_ascii_case("All") {
                result.retain(|post| post.category.eq_ignore_ascii_case(category));
            }
        }

        if let Some(limit) = limit {
            result.truncate(limit);
        }

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn featured(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let mut result = Self::sorted_newest_first(&posts);
        result.retain(|post| post.featured);
        Ok(result)
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let needle = query.to_lowercase();
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .filter(|post| {
                post.title.to_lowercase().contains(&needle)
                    || post.excerpt.to_lowercase().contains(&needle)
                    || post.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let post = Post::new(draft);
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        tracing::debug!(post_id = %post.id, "Post created");
        Ok(post)
    }

    async fn like(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        if let Some(post) = posts.get_mut(&id) {
            post.likes = post.likes.saturating_add(1);
        }
        Ok(())
    }
}

/// In-memory user repository.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, draft: UserDraft) -> Result<User, RepoError> {
        let user = User::new(draft);
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn draft(title: &str, category: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            excerpt: format!("{title} excerpt"),
            content: format!("{title} content."),
            category: category.to_string(),
            image_url: "https://example.com/cover.jpg".to_string(),
            author_name: "Author".to_string(),
            author_avatar: "https://example.com/avatar.jpg".to_string(),
            author_bio: None,
            read_time: 3,
            featured: false,
        }
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|post| post.title.as_str()).collect()
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let repo = InMemoryPostRepository::new();
        let mut seen = HashSet::new();
        for i in 0..32 {
            let post = repo.create(draft(&format!("Post {i}"), "Misc")).await.unwrap();
            assert!(seen.insert(post.id));
        }
    }

    #[tokio::test]
    async fn created_post_starts_with_zero_likes() {
        let repo = InMemoryPostRepository::new();
        let post = repo.create(draft("Fresh", "Misc")).await.unwrap();
        assert_eq!(post.likes, 0);
    }

    #[tokio::test]
    async fn create_then_find_round_trips() {
        let repo = InMemoryPostRepository::seeded();
        let created = repo.create(draft("Round Trip", "Misc")).await.unwrap();

        let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, created.title);
        assert_eq!(fetched.excerpt, created.excerpt);
        assert_eq!(fetched.content, created.content);
        assert_eq!(fetched.likes, 0);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn find_unknown_id_is_none() {
        let repo = InMemoryPostRepository::seeded();
        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_sorted_newest_first() {
        let repo = InMemoryPostRepository::seeded();
        let posts = repo.list(None, None).await.unwrap();
        assert_eq!(posts.len(), 6);
        for pair in posts.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(posts[0].title, "Finding Peace in Mountain Solitude");
        assert_eq!(posts[5].title, "Seasonal Cooking Guide");
    }

    #[tokio::test]
    async fn list_order_is_stable_between_calls() {
        let repo = InMemoryPostRepository::seeded();
        let first: Vec<Uuid> = repo.list(None, None).await.unwrap().iter().map(|p| p.id).collect();
        let second: Vec<Uuid> = repo.list(None, None).await.unwrap().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn all_sentinel_means_no_filter_in_any_casing() {
        let repo = InMemoryPostRepository::seeded();
        let unfiltered = repo.list(None, None).await.unwrap();
        for sentinel in ["All", "all", "ALL"] {
            let posts = repo.list(Some(sentinel), None).await.unwrap();
            assert_eq!(titles(&posts), titles(&unfiltered));
        }
    }

    #[tokio::test]
    async fn category_filter_is_case_insensitive() {
        let repo = InMemoryPostRepository::seeded();
        for casing in ["travel", "TRAVEL", "Travel"] {
            let posts = repo.list(Some(casing), None).await.unwrap();
            assert_eq!(titles(&posts), vec!["Finding Peace in Mountain Solitude"]);
        }
    }

    #[tokio::test]
    async fn unknown_category_yields_empty_list() {
        let repo = InMemoryPostRepository::seeded();
        assert!(repo.list(Some("Gardening"), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn limit_keeps_the_most_recent_posts() {
        let repo = InMemoryPostRepository::seeded();
        let posts = repo.list(None, Some(2)).await.unwrap();
        assert_eq!(
            titles(&posts),
            vec!["Finding Peace in Mountain Solitude", "Minimalist Design Principles"]
        );
    }

    #[tokio::test]
    async fn limit_applies_after_category_filter() {
        let repo = InMemoryPostRepository::seeded();
        let posts = repo.list(Some("design"), Some(5)).await.unwrap();
        assert_eq!(titles(&posts), vec!["Minimalist Design Principles"]);
    }

    #[tokio::test]
    async fn featured_returns_exactly_the_featured_subset_newest_first() {
        let repo = InMemoryPostRepository::seeded();
        let posts = repo.featured().await.unwrap();
        assert_eq!(
            titles(&posts),
            vec![
                "Finding Peace in Mountain Solitude",
                "Minimalist Design Principles",
                "The Future of Remote Work",
            ]
        );
        assert!(posts.iter().all(|post| post.featured));
    }

    #[tokio::test]
    async fn search_matches_title_excerpt_and_category() {
        let repo = InMemoryPostRepository::seeded();

        // "design" hits the Minimalist post twice over: title and category.
        let by_title = repo.search("design").await.unwrap();
        assert_eq!(titles(&by_title), vec!["Minimalist Design Principles"]);

        // "wellness" only appears as a category.
        let by_category = repo.search("wellness").await.unwrap();
        assert_eq!(titles(&by_category), vec!["Mindful Living in 2024"]);

        // "recipes" only appears in an excerpt.
        let by_excerpt = repo.search("recipes").await.unwrap();
        assert_eq!(titles(&by_excerpt), vec!["Seasonal Cooking Guide"]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let repo = InMemoryPostRepository::seeded();
        let posts = repo.search("MOUNTAIN").await.unwrap();
        assert_eq!(titles(&posts), vec!["Finding Peace in Mountain Solitude"]);
    }

    #[tokio::test]
    async fn search_without_matches_is_empty() {
        let repo = InMemoryPostRepository::seeded();
        assert!(repo.search("blockchain").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn like_increments_by_exactly_one_per_call() {
        let repo = InMemoryPostRepository::seeded();
        let post = repo.list(None, Some(1)).await.unwrap().remove(0);
        let before = post.likes;

        for _ in 0..3 {
            repo.like(post.id).await.unwrap();
        }

        let after = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(after.likes, before + 3);
    }

    #[tokio::test]
    async fn like_on_unknown_id_changes_nothing() {
        let repo = InMemoryPostRepository::seeded();
        let before: Vec<(Uuid, u32)> = repo
            .list(None, None)
            .await
            .unwrap()
            .iter()
            .map(|post| (post.id, post.likes))
            .collect();

        repo.like(Uuid::new_v4()).await.unwrap();

        let after: Vec<(Uuid, u32)> = repo
            .list(None, None)
            .await
            .unwrap()
            .iter()
            .map(|post| (post.id, post.likes))
            .collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn seeded_store_holds_six_posts() {
        let repo = InMemoryPostRepository::seeded();
        assert_eq!(repo.list(None, None).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn user_round_trip_by_id_and_username() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .create(UserDraft {
                username: "sarah".to_string(),
                password: "opaque".to_string(),
            })
            .await
            .unwrap();

        let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "sarah");

        let by_name = repo.find_by_username("sarah").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }
}
