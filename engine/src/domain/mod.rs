//! Domain definitions.

pub mod listing;
pub mod store;

pub use self::{listing::Listing, store::Store};
