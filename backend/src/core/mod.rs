//! Core utilities: cost-time management.

pub mod time;
