//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod newsletter;
mod repository;

pub use newsletter::{Newsletter, NewsletterError};
pub use repository::{PostRepository, UserRepository};
