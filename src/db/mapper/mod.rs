//! Record mapper: conversions between domain models and wire rows.
//!
//! `*_to_app` turns a decoded row into its domain entity, `*_to_wire` turns a
//! creation draft into an insert payload and `*_patch_to_wire` turns a patch
//! into an update payload carrying only the fields that were set. Each entity
//! also gets its [`Record`](crate::db::Record) impl here.

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
