//! Remote API plumbing.
//!
//! `channel` holds the two HTTP channel configurations (anonymous and
//! token-authorized), `types` the wire and domain records, and `users` the
//! user-facing service calls built on top of them.

pub mod channel;
pub mod error;
pub mod types;
pub mod users;
