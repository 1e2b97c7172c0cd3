//! Database entity models for the authentication core.
//!
//! These Sea-ORM entities describe the two tables the core owns:
//!
//! * [`principal`] maps to `users`, one row per registered identity.
//! * [`session`] maps to `sessions`, at most one row per principal.
//!
//! The schema itself is created by [`crate::migration::Migrator`] when the
//! `migration` feature is enabled.

/// Registered principals (`users` table).
pub mod principal;

/// Live sessions (`sessions` table).
pub mod session;
