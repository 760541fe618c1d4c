//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` and `notify` are plain state structs held in `RwSignal` contexts
//! provided from the app root. `session` is the only writer of `auth`; every
//! other component reads.

pub mod auth;
pub mod notify;
pub mod session;
