//! Rosterkeep API Library
//!
//! Persistence service for sports team rosters: an ordered team store,
//! the owner-gated team service on top of it, and the HTTP adapter.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
