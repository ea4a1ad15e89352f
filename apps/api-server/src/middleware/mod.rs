//! Request-level middleware and error mapping.

pub mod error;
