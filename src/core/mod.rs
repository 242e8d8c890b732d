//! Core module containing the crate-wide error types

pub mod error;

pub use error::{ConfigError, QueryError, ShelfError, ShelfResult};
