//! [`Order`] definitions.

use std::cmp::Ordering;

use derive_more::Display;

/// Order of sorting.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Order {
    /// Ascending order.
    #[display("ascending")]
    Ascending,

    /// Descending order.
    #[display("descending")]
    Descending,
}

impl Order {
    /// Applies this [`Order`] to the [`Ordering`] of two values compared in
    /// ascending order.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Returns the [`Order`] following this one in a toggle cycle.
    ///
    /// [`None`] means the cycle has ended and sorting should be removed.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Ascending => Some(Self::Descending),
            Self::Descending => None,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::cmp::Ordering;

    use super::Order;

    #[test]
    fn apply() {
        assert_eq!(Order::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Order::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Order::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn cycle() {
        assert_eq!(Order::Ascending.next(), Some(Order::Descending));
        assert_eq!(Order::Descending.next(), None);
    }
}
