//! Product catalog API server library.
//!
//! Exposes the building blocks (config, state, error handling, extractors,
//! routes) so integration tests and the binary entrypoint share them.

pub mod config;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
