//! In-memory repository adapters.

mod memory;
mod seed;

pub use memory::{InMemoryPostRepository, InMemoryUserRepository};
pub use seed::sample_posts;
