//! Filtering of [`Listing`]s by equality constraints.

use std::{borrow::Borrow, collections::BTreeMap};

use crate::domain::{listing::Field, Listing};

/// Set of equality constraints on [`Listing`] [`Field`]s.
///
/// A [`Field`] without a constraint is unconstrained. Any [`Field`] may be
/// constrained, and only non-empty values are ever kept. Values are compared
/// as described in [`Field::matches()`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter(BTreeMap<Field, String>);

impl Filter {
    /// Creates a new empty [`Filter`], matching any [`Listing`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Filter`] out of raw `(name, value)` parameters.
    ///
    /// Parameters with unknown names or empty values are ignored.
    #[must_use]
    pub fn from_params<K, V>(params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        params
            .into_iter()
            .fold(Self::new(), |filter, (name, value)| {
                let name = name.as_ref();
                if let Ok(field) = name.parse::<Field>() {
                    filter.with(field, value)
                } else {
                    tracing::debug!(name, "ignoring unknown filter field");
                    filter
                }
            })
    }

    /// Constrains the provided [`Field`] to be equal to the provided `value`.
    ///
    /// Empty `value` removes the constraint.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            drop(self.0.remove(&field));
        } else {
            drop(self.0.insert(field, value));
        }
        self
    }

    /// Returns the value the provided [`Field`] is constrained to, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Indicates whether this [`Filter`] has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Indicates whether the provided [`Listing`] satisfies all the
    /// constraints of this [`Filter`].
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| field.matches(listing, expected))
    }
}

/// Filters the provided `listings` with the provided [`Filter`], preserving
/// their relative order.
pub fn apply<T: Borrow<Listing>>(
    listings: impl IntoIterator<Item = T>,
    filter: &Filter,
) -> Vec<T> {
    listings
        .into_iter()
        .filter(|l| filter.matches(l.borrow()))
        .collect()
}
