//! # mediahub-database
//!
//! PostgreSQL connection management and the repositories backing the
//! media streaming collaborators.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
