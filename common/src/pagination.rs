//! Abstractions for offset pagination.

use std::{num::NonZeroUsize, ops::Range, str::FromStr};

use derive_more::{Display, From, Into};

/// Number of items in a single page.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct Size(NonZeroUsize);

impl Size {
    /// Default [`Size`] of a page.
    pub const DEFAULT: Self = match NonZeroUsize::new(15) {
        Some(size) => Self(size),
        None => unreachable!(),
    };

    /// Creates a new [`Size`] if the provided `size` is not zero.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        match NonZeroUsize::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Returns the number of items in a page of this [`Size`].
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for Size {
    type Error = &'static str;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size).ok_or("page size must not be zero")
    }
}

impl From<Size> for usize {
    fn from(size: Size) -> Self {
        size.get()
    }
}

/// Zero-based index of an existing page.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Index(usize);

impl Index {
    /// Index of the first page.
    pub const FIRST: Self = Self(0);

    /// Returns the one-based [`Number`] of the page at this [`Index`].
    #[must_use]
    pub fn number(self) -> Number {
        Number(i64::try_from(self.0).map_or(i64::MAX, |i| i.saturating_add(1)))
    }
}

/// Zero-based index of a page requested by a caller.
///
/// May point outside of the existing pages, so it's clamped when resolved
/// into an [`Index`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Requested(i64);

impl Requested {
    /// Request of the first page.
    pub const FIRST: Self = Self(0);

    /// Resolves this [`Requested`] index into an existing page [`Index`],
    /// given the total `count` of pages.
    ///
    /// The result is always in `[0, max(count - 1, 0)]` range.
    #[must_use]
    pub fn clamp(self, count: usize) -> Index {
        let last = count.saturating_sub(1);
        Index(usize::try_from(self.0).map_or(0, |i| i.min(last)))
    }
}

impl From<Number> for Requested {
    fn from(Number(n): Number) -> Self {
        Self(n.saturating_sub(1))
    }
}

impl From<Index> for Requested {
    fn from(Index(i): Index) -> Self {
        Self(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

/// One-based number of a page, as it's seen outside.
///
/// Any integer is accepted, so stale or malformed numbers are clamped only
/// once converted into a [`Requested`] index.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Number(i64);

impl Number {
    /// Number of the first page.
    pub const FIRST: Self = Self(1);
}

impl Default for Number {
    fn default() -> Self {
        Self::FIRST
    }
}

impl FromStr for Number {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| "invalid page number")
    }
}

/// Information about a single page of items.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Info {
    /// [`Size`] of pages.
    pub size: Size,

    /// Effective [`Index`] of the page.
    pub index: Index,

    /// Total number of pages.
    pub count: usize,

    /// Total number of items in all pages.
    pub total: usize,
}

impl Info {
    /// Resolves the [`Requested`] page of `total` items split into pages of
    /// the provided [`Size`].
    #[must_use]
    pub fn new(total: usize, size: Size, requested: Requested) -> Self {
        let count = total.div_ceil(size.get());
        Self {
            size,
            index: requested.clamp(count),
            count,
            total,
        }
    }

    /// Returns the one-based [`Number`] of this page.
    #[must_use]
    pub fn number(&self) -> Number {
        self.index.number()
    }

    /// Returns the range of item positions belonging to this page.
    ///
    /// The range is empty if there are no items at all.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        let start = usize::from(self.index)
            .saturating_mul(self.size.get())
            .min(self.total);
        let end = start.saturating_add(self.size.get()).min(self.total);
        start..end
    }
}

/// A page of items.
#[derive(Clone, Copy, Debug)]
pub struct Page<'a, T> {
    /// Items of this [`Page`].
    pub rows: &'a [T],

    /// [`Info`] about this [`Page`].
    pub info: Info,
}

/// Slices the provided `items` into a [`Page`] of the provided [`Size`],
/// clamping the [`Requested`] index into the existing pages.
#[must_use]
pub fn paginate<T>(items: &[T], size: Size, requested: Requested) -> Page<'_, T> {
    let info = Info::new(items.len(), size, requested);
    Page {
        rows: &items[info.range()],
        info,
    }
}

#[cfg(test)]
mod spec {
    use super::{paginate, Index, Info, Number, Requested, Size};

    fn size(n: usize) -> Size {
        Size::new(n).unwrap()
    }

    #[test]
    fn counts_pages() {
        assert_eq!(Info::new(0, size(15), Requested::FIRST).count, 0);
        assert_eq!(Info::new(1, size(15), Requested::FIRST).count, 1);
        assert_eq!(Info::new(15, size(15), Requested::FIRST).count, 1);
        assert_eq!(Info::new(16, size(15), Requested::FIRST).count, 2);
        assert_eq!(Info::new(30, size(15), Requested::FIRST).count, 2);
        assert_eq!(Info::new(31, size(15), Requested::FIRST).count, 3);
    }

    #[test]
    fn clamps_requested_index() {
        let info = Info::new(30, size(15), Requested::from(5_i64));
        assert_eq!(info.index, Index::from(1_usize));

        let info = Info::new(30, size(15), Requested::from(-3_i64));
        assert_eq!(info.index, Index::FIRST);

        let info = Info::new(30, size(15), Requested::from(i64::MAX));
        assert_eq!(info.index, Index::from(1_usize));

        let info = Info::new(0, size(15), Requested::from(7_i64));
        assert_eq!(info.index, Index::FIRST);
        assert!(info.range().is_empty());
    }

    #[test]
    fn slices_rows() {
        let items = (1..=30).collect::<Vec<_>>();

        let page = paginate(&items, size(15), Requested::from(5_i64));
        assert_eq!(page.info.count, 2);
        assert_eq!(page.info.index, Index::from(1_usize));
        assert_eq!(page.rows, (16..=30).collect::<Vec<_>>().as_slice());

        let page = paginate(&items[..20], size(15), Requested::from(1_i64));
        assert_eq!(page.rows, (16..=20).collect::<Vec<_>>().as_slice());

        let page = paginate::<i32>(&[], size(15), Requested::FIRST);
        assert!(page.rows.is_empty());
        assert_eq!(page.info.count, 0);
    }

    #[test]
    fn converts_numbers() {
        assert_eq!(Requested::from(Number::FIRST), Requested::FIRST);
        assert_eq!(Requested::from("3".parse::<Number>().unwrap()), Requested::from(2_i64));
        assert_eq!(Requested::from(Number::from(0_i64)), Requested::from(-1_i64));
        assert_eq!(Index::from(1_usize).number(), Number::from(2_i64));
        assert!("abc".parse::<Number>().is_err());
    }

    #[test]
    fn rejects_zero_size() {
        assert!(Size::new(0).is_none());
        assert!(Size::try_from(0_usize).is_err());
        assert_eq!(Size::default().get(), 15);
    }
}
