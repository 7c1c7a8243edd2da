//! Shared primitives for the product catalog: id and timestamp types plus
//! the domain error returned by the service layers.

pub mod error;
pub mod types;
