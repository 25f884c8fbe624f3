//! Marker types.

/// Marker type describing an entity publication.
#[derive(Clone, Copy, Debug)]
pub struct Publication;
