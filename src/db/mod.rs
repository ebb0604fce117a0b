//! Data-access layer.
//!
//! Maps between the backend's snake_case rows and the application's
//! camelCase models, and exposes per-entity CRUD through [`DataService`].
//!
//! # Architecture
//!
//! - `error`: data-access error types
//! - `models`: domain entities, drafts and patches
//! - `wire`: row shapes as stored by the backend
//! - `mapper`: conversions between the two, one [`Record`] impl per entity
//! - `repository`: the [`Repository`] façade and [`DataService`] entry point

mod error;
pub mod mapper;
pub mod models;
mod repository;
pub mod wire;

#[cfg(test)]
mod error_test;
#[cfg(test)]
mod models_test;
#[cfg(test)]
mod repository_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
