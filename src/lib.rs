//! Typed data access for a photography studio's business backend.
//!
//! [`db::DataService`] exposes list/get/create/update/delete for every
//! business entity over any [`remote::RemoteClient`]: the PostgREST HTTP
//! client in production, [`remote::MemoryBackend`] in tests.
//! [`tracker::OperationTracker`] adds busy/error bookkeeping for UI callers.

pub mod config;
pub mod db;
pub mod remote;
pub mod serde_utils;
pub mod tracker;

#[cfg(feature = "cli")]
pub mod cli;
