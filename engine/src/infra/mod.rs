//! Infrastructure layer.

pub mod persistence;

pub use self::persistence::{Discard, Location, Persistence};
