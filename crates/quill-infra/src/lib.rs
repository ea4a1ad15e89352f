//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Everything here is in-memory: state lives for the process lifetime and
//! is re-seeded on every start.

pub mod newsletter;
pub mod repository;

pub use newsletter::InMemoryNewsletter;
pub use repository::{InMemoryPostRepository, InMemoryUserRepository};
