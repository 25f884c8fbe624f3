//! Aggregate price statistics of [`Listing`]s.

use std::borrow::Borrow;

use rust_decimal::Decimal;

use crate::domain::Listing;

/// Price series of [`Listing`]s, each holding only known (positive) values.
///
/// These are the inputs of any [`Summary`]: callers needing other measures
/// may compute them right from here.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Prices {
    /// Total prices of [`Listing`]s.
    pub total: Vec<Decimal>,

    /// Prices per square meter of [`Listing`]s.
    pub sqm: Vec<Decimal>,
}

impl Prices {
    /// Collects [`Prices`] of the provided `listings`, skipping unknown
    /// values.
    #[must_use]
    pub fn collect<T: Borrow<Listing>>(listings: &[T]) -> Self {
        let listings = listings.iter().map(<T as Borrow<Listing>>::borrow);
        Self {
            total: listings
                .clone()
                .filter_map(Listing::known_price)
                .map(Into::into)
                .collect(),
            sqm: listings
                .filter_map(Listing::known_price_per_sqm)
                .map(Into::into)
                .collect(),
        }
    }
}

/// Summary of a non-empty price series.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    /// Number of values in the series.
    pub count: usize,

    /// Minimal value of the series.
    pub min: Decimal,

    /// Arithmetic mean of the series.
    pub mean: Decimal,

    /// Median of the series.
    ///
    /// For a series of even length it's the mean of two middle values.
    pub median: Decimal,

    /// Maximal value of the series.
    pub max: Decimal,
}

impl Summary {
    /// Summarizes the provided price `series`.
    ///
    /// [`None`] is returned for an empty `series`, as there is no data to
    /// summarize.
    #[must_use]
    pub fn of(series: &[Decimal]) -> Option<Self> {
        let mut sorted = series.to_vec();
        sorted.sort_unstable();

        let (&min, &max) = (sorted.first()?, sorted.last()?);
        let count = sorted.len();

        let mid = count / 2;
        let median = if count % 2 == 0 {
            midpoint(sorted[mid - 1], sorted[mid])
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            min,
            mean: mean(&sorted),
            median,
            max,
        })
    }
}

/// Returns the value in the middle between `lo` and `hi`.
///
/// `lo` must not be greater than `hi`, so the result never overflows.
fn midpoint(lo: Decimal, hi: Decimal) -> Decimal {
    lo + (hi - lo) / Decimal::TWO
}

/// Returns the arithmetic mean of the provided non-empty `sorted` series of
/// non-negative values.
///
/// Once the sum overflows, the mean is accumulated incrementally instead,
/// which stays within the series bounds.
fn mean(sorted: &[Decimal]) -> Decimal {
    let sum = sorted
        .iter()
        .try_fold(Decimal::ZERO, |sum, &v| sum.checked_add(v));
    if let Some(sum) = sum {
        return sum / Decimal::from(sorted.len());
    }

    sorted
        .iter()
        .zip(1_u64..)
        .fold(Decimal::ZERO, |mean, (&v, n)| {
            mean + (v - mean) / Decimal::from(n)
        })
}

/// Aggregate statistics of [`Prices`].
///
/// [`None`] means the corresponding series has no data.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// [`Summary`] of [`Prices::total`].
    pub total: Option<Summary>,

    /// [`Summary`] of [`Prices::sqm`].
    pub sqm: Option<Summary>,
}

impl Stats {
    /// Indicates whether none of the series has any data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total.is_none() && self.sqm.is_none()
    }
}

impl From<&Prices> for Stats {
    fn from(prices: &Prices) -> Self {
        Self {
            total: Summary::of(&prices.total),
            sqm: Summary::of(&prices.sqm),
        }
    }
}

/// Computes [`Stats`] of all the provided `listings`.
#[must_use]
pub fn compute<T: Borrow<Listing>>(listings: &[T]) -> Stats {
    Stats::from(&Prices::collect(listings))
}
