//! Sorting of [`Listing`]s by a single [`Field`].

use std::{borrow::Borrow, cmp::Ordering};

use common::Order;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

use crate::domain::{listing::Field, Listing};

/// Active sorting of [`Listing`]s.
///
/// At most one [`Sort`] is active at a time, so "unsorted" is represented as
/// [`None`] wherever an `Option<Sort>` is expected.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, SmartDefault,
)]
pub struct Sort {
    /// [`Field`] to sort by.
    #[default(Field::PublishedAt)]
    pub field: Field,

    /// [`Order`] to sort in.
    #[default(Order::Descending)]
    pub order: Order,
}

impl Sort {
    /// Creates a new [`Sort`] by the provided [`Field`] in ascending order.
    #[must_use]
    pub const fn ascending(field: Field) -> Self {
        Self {
            field,
            order: Order::Ascending,
        }
    }

    /// Creates a new [`Sort`] by the provided [`Field`] in descending order.
    #[must_use]
    pub const fn descending(field: Field) -> Self {
        Self {
            field,
            order: Order::Descending,
        }
    }

    /// Toggles sorting by the provided [`Field`] starting from the `current`
    /// one.
    ///
    /// The sorting of a single [`Field`] cycles through:
    /// unsorted → ascending → descending → unsorted.
    /// Toggling a different [`Field`] than the `current` one always starts
    /// its cycle anew, dropping the `current` one.
    #[must_use]
    pub fn toggle(current: Option<Self>, field: Field) -> Option<Self> {
        match current {
            Some(sort) if sort.field == field => {
                sort.order.next().map(|order| Self { field, order })
            }
            Some(_) | None => Some(Self::ascending(field)),
        }
    }

    /// Compares the provided [`Listing`]s according to this [`Sort`].
    #[must_use]
    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        self.order.apply(self.field.compare(a, b))
    }
}

/// Stably sorts the provided `listings` with the provided [`Sort`].
///
/// [`Listing`]s comparing equal keep their relative order. [`None`] keeps
/// the order untouched.
#[must_use]
pub fn apply<T: Borrow<Listing>>(mut listings: Vec<T>, sort: Option<Sort>) -> Vec<T> {
    if let Some(sort) = sort {
        listings.sort_by(|a, b| sort.compare(a.borrow(), b.borrow()));
    }
    listings
}
