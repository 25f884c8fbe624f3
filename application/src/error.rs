//! Errors of the application.

use std::io;

use derive_more::{Display, Error, From};

/// Error of loading listings.
#[derive(Debug, Display, Error, From)]
pub enum LoadError {
    /// Listings file cannot be read.
    #[display("failed to read listings: {_0}")]
    Io(io::Error),

    /// Listings are not a valid JSON document of the expected shape.
    #[display("malformed listings: {_0}")]
    Json(serde_json::Error),
}
