//! Durable client-side storage.

pub mod tokens;
