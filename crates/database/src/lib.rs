//! # Catalog Database Crate
//!
//! Everything that touches PostgreSQL lives here. The rest of the workspace
//! only sees the `ProductRepository` trait and typed results.
//!
//! ## Public API
//!
//! - `connect` / `close`: build and tear down the connection pool from settings.
//! - `run_migrations`: apply the embedded schema migrations.
//! - `ProductRepository`: the read operations the service layer depends on.
//! - `DbRepository`: the PostgreSQL implementation, holding the injected pool.
//! - `DbError`: every failure this crate can report. Nothing is swallowed.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{close, connect, run_migrations};
pub use error::DbError;
pub use repository::{DbRepository, ProductRepository};
