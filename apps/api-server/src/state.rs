//! Application state - shared across all handlers.
//!
//! The store is constructed here, once, and injected into handlers via
//! `web::Data`; nothing reaches it through a global.

use std::sync::Arc;

use quill_core::ports::{Newsletter, PostRepository, UserRepository};
use quill_infra::newsletter::InMemoryNewsletter;
use quill_infra::repository::{InMemoryPostRepository, InMemoryUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
    pub newsletter: Arc<dyn Newsletter>,
}

impl AppState {
    /// Build the application state with the in-memory implementations.
    /// The post store starts with the sample content.
    pub fn new() -> Self {
        let state = Self {
            posts: Arc::new(InMemoryPostRepository::seeded()),
            users: Arc::new(InMemoryUserRepository::new()),
            newsletter: Arc::new(InMemoryNewsletter::new()),
        };

        tracing::info!("Application state initialized");

        state
    }
}
