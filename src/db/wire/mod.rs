//! Row shapes as stored by the backend.
//!
//! `*Row` types decode what the backend returns: snake_case columns, money
//! columns that may arrive as strings, and embedded JSON blobs. `*Write`
//! types encode insert and update payloads; a `None` field is left out of
//! the payload entirely, `Some(None)` writes an explicit `null`.

mod account;
mod catalog;
mod contracts;
mod crm;
mod finance;
mod marketing;
mod operations;
mod payouts;
mod projects;
mod team;

pub use account::*;
pub use catalog::*;
pub use contracts::*;
pub use crm::*;
pub use finance::*;
pub use marketing::*;
pub use operations::*;
pub use payouts::*;
pub use projects::*;
pub use team::*;
