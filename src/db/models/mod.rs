//! Domain models.
//!
//! Each entity comes in three shapes: the stored entity (with its id), a
//! `New*` draft for creation, and a `*Patch` where every field is optional for
//! partial updates. All serialize with camelCase keys.
//!
//! Nullable columns appear as `Option<Option<T>>` in patches: `None` leaves
//! the column alone, `Some(None)` clears it.

mod account;
mod blobs;
mod catalog;
mod contracts;
mod crm;
mod enums;
mod finance;
mod marketing;
mod operations;
mod payouts;
mod projects;
mod team;

pub use account::*;
pub use blobs::*;
pub use catalog::*;
pub use contracts::*;
pub use crm::*;
pub use enums::*;
pub use finance::*;
pub use marketing::*;
pub use operations::*;
pub use payouts::*;
pub use projects::*;
pub use team::*;

/// Identifier assigned by the backend on insert (a UUID string).
pub type Id = String;
