//! Reusable UI components.

pub mod balance;
pub mod notices;
