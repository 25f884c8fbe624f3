//! [`Store`] definitions.

use std::{collections::HashSet, slice, sync::Arc};

use serde::Deserialize;

use super::{listing, Listing};

/// Immutable snapshot of all the [`Listing`]s of a single building.
///
/// Cloning a [`Store`] is cheap and shares the same [`Listing`]s, so it may
/// be handed to any number of views at once.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "Vec<Listing>")]
pub struct Store(Arc<[Listing]>);

impl Store {
    /// Creates a new [`Store`] out of the provided [`Listing`]s, preserving
    /// their order.
    ///
    /// Only the first [`Listing`] is kept for a duplicated [`listing::Id`].
    #[must_use]
    pub fn new(listings: impl IntoIterator<Item = Listing>) -> Self {
        let mut seen = HashSet::<listing::Id>::new();
        let listings = listings
            .into_iter()
            .filter(|l| {
                let is_new = seen.insert(l.id);
                if !is_new {
                    tracing::warn!(id = %l.id, "skipping duplicated `Listing`");
                }
                is_new
            })
            .collect::<Vec<_>>();

        Self(listings.into())
    }

    /// Returns all the [`Listing`]s of this [`Store`].
    #[must_use]
    pub fn as_slice(&self) -> &[Listing] {
        &self.0
    }

    /// Returns an iterator over the [`Listing`]s of this [`Store`].
    pub fn iter(&self) -> slice::Iter<'_, Listing> {
        self.0.iter()
    }

    /// Returns the number of [`Listing`]s in this [`Store`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether this [`Store`] has no [`Listing`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Listing>> for Store {
    fn from(listings: Vec<Listing>) -> Self {
        Self::new(listings)
    }
}

impl FromIterator<Listing> for Store {
    fn from_iter<I: IntoIterator<Item = Listing>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Listing;
    type IntoIter = slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
