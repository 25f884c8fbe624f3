//! Listing View Engine: filtering, sorting, pagination and price statistics
//! of a building's classifieds.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod filter;
pub mod infra;
pub mod sort;
pub mod stats;

use std::borrow::Borrow;

use common::{
    operations::Persist,
    pagination::{self, Info, Number, Requested},
    Order,
};
use smart_default::SmartDefault;
use tracerr::Traced;

// Used in integration tests.
#[cfg(test)]
use proptest as _;

use self::{
    domain::{listing::Field, Listing, Store},
    infra::Persistence,
};

pub use self::{
    command::Command, filter::Filter, sort::Sort, stats::Stats,
};

/// [`View`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// [`pagination::Size`] of [`View`] pages.
    pub page_size: pagination::Size,

    /// [`Sort`] a [`View`] starts with.
    ///
    /// [`None`] starts it unsorted.
    #[default(Some(Sort::default()))]
    pub default_sort: Option<Sort>,
}

/// Stateful view over the [`Listing`]s of a [`Store`].
///
/// Owns the current [`Filter`], [`Sort`] and requested page, and keeps the
/// output of the whole pipeline (filter, then sort, then aggregate and
/// paginate) up to date. The state is changed by [`Command`]s only.
#[derive(Debug)]
pub struct View<P = infra::Discard> {
    /// Configuration of this [`View`].
    config: Config,

    /// [`Store`] this [`View`] is over.
    store: Store,

    /// Current [`Filter`].
    filter: Filter,

    /// Current [`Sort`], if any.
    sort: Option<Sort>,

    /// Page requested by the last [`Command`].
    requested: Requested,

    /// [`Persistence`] of the effective page [`Number`].
    persistence: P,

    /// [`Store`] positions of the matched [`Listing`]s, in [`Sort`] order.
    order: Vec<usize>,

    /// [`stats::Prices`] of the matched [`Listing`]s.
    prices: stats::Prices,

    /// [`Stats`] of the matched [`Listing`]s.
    stats: Stats,

    /// Current page [`Info`].
    page: Info,
}

impl<P> View<P> {
    /// Creates a new [`View`] over the provided [`Store`], starting with the
    /// provided [`Filter`] and page [`Number`].
    ///
    /// The initial page is honoured as is (clamped only), without resetting
    /// it because of the initial [`Filter`]. Nothing is persisted on
    /// creation.
    #[must_use]
    pub fn new(
        config: Config,
        store: Store,
        filter: Filter,
        page: Number,
        persistence: P,
    ) -> Self {
        let requested = Requested::from(page);
        let mut view = Self {
            config,
            store,
            filter,
            sort: config.default_sort,
            requested,
            persistence,
            order: Vec::new(),
            prices: stats::Prices::default(),
            stats: Stats::default(),
            page: Info::new(0, config.page_size, requested),
        };
        view.recompute();
        view
    }

    /// Returns [`Config`] of this [`View`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Store`] this [`View`] is over.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the current [`Filter`] of this [`View`].
    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns the current [`Sort`] of this [`View`], if any.
    #[must_use]
    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Returns the [`Order`] the provided [`Field`] is currently sorted in,
    /// if it's the sorted one.
    #[must_use]
    pub fn sort_of(&self, field: Field) -> Option<Order> {
        self.sort.filter(|s| s.field == field).map(|s| s.order)
    }

    /// Returns the [`Listing`]s of the current page, in [`Sort`] order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &Listing> {
        let page = pagination::paginate(
            &self.order,
            self.config.page_size,
            self.page.index.into(),
        );
        self.resolve(page.rows)
    }

    /// Returns all the [`Listing`]s matching the current [`Filter`], in
    /// [`Sort`] order.
    pub fn matches(&self) -> impl ExactSizeIterator<Item = &Listing> {
        self.resolve(&self.order)
    }

    /// Returns [`Stats`] of all the [`Listing`]s matching the current
    /// [`Filter`], regardless of the current page.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns [`stats::Prices`] backing the [`View::stats()`].
    #[must_use]
    pub fn prices(&self) -> &stats::Prices {
        &self.prices
    }

    /// Returns [`Info`] about the current page.
    #[must_use]
    pub fn page(&self) -> Info {
        self.page
    }

    /// Returns [`Persistence`] of this [`View`].
    #[must_use]
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Resolves the provided [`Store`] positions into [`Listing`]s.
    fn resolve<'a>(
        &'a self,
        positions: &'a [usize],
    ) -> impl ExactSizeIterator<Item = &'a Listing> {
        let listings = self.store.as_slice();
        positions.iter().map(move |&p| &listings[p])
    }

    /// Runs the whole pipeline over the current state.
    fn recompute(&mut self) {
        let rows = self
            .store
            .iter()
            .enumerate()
            .map(|(position, listing)| Row { position, listing });
        let matched = filter::apply(rows, &self.filter);
        let sorted = sort::apply(matched, self.sort);

        self.prices = stats::Prices::collect(&sorted);
        self.stats = Stats::from(&self.prices);
        self.order = sorted.into_iter().map(|r| r.position).collect();
        self.page = pagination::paginate(
            &self.order,
            self.config.page_size,
            self.requested,
        )
        .info;

        tracing::debug!(
            total = self.store.len(),
            matched = self.order.len(),
            pages = self.page.count,
            index = %self.page.index,
            "recomputed view"
        );
    }
}

impl<P> View<P>
where
    P: Persistence<Persist<Number>>,
{
    /// Recomputes this [`View`] and persists the effective page [`Number`]
    /// if it has changed or differs from the requested one.
    ///
    /// The requested page is then settled to the effective one, so a clamped
    /// request is persisted once.
    ///
    /// # Errors
    ///
    /// If the [`Persistence`] fails. The [`View`] is recomputed anyway.
    fn refresh(&mut self) -> Result<Info, Traced<P::Err>> {
        let before = self.page.index;
        self.recompute();

        let clamped = self.requested != Requested::from(self.page.index);
        self.requested = self.page.index.into();

        if clamped || self.page.index != before {
            self.persistence
                .execute(Persist(self.page.number()))
                .map(drop)
                .map_err(tracerr::wrap!())?;
        }
        Ok(self.page)
    }
}

/// [`Listing`] remembering its position in a [`Store`].
#[derive(Clone, Copy, Debug)]
struct Row<'a> {
    /// Position of the [`Listing`] in the [`Store`].
    position: usize,

    /// The [`Listing`] itself.
    listing: &'a Listing,
}

impl Borrow<Listing> for Row<'_> {
    fn borrow(&self) -> &Listing {
        self.listing
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::Persist,
        pagination::{Index, Number, Size},
        DateTime, Order,
    };
    use rust_decimal::Decimal;

    use crate::{
        command::{ReplaceListings, RequestPage, SetFilters, ToggleSort},
        domain::{
            listing::{Field, Kind},
            Listing, Store,
        },
        infra::{Location, Persistence},
        Command as _, Config, Filter, Sort, View,
    };

    /// `count` listings, the first `apartments` of them being apartments.
    fn store(count: u64, apartments: u64) -> Store {
        (1..=count)
            .map(|id| {
                let category =
                    if id <= apartments { "apartment" } else { "house" };
                let sqm = i64::try_from(id).unwrap() * 10;
                Listing {
                    price_per_sqm: Some(Decimal::from(sqm).into()),
                    ..Listing::new(id, category, Kind::Sale, id * 1000)
                }
            })
            .collect()
    }

    fn unsorted() -> Config {
        Config {
            default_sort: None,
            ..Config::default()
        }
    }

    fn ids<'a>(listings: impl Iterator<Item = &'a Listing>) -> Vec<u64> {
        listings.map(|l| l.id.into()).collect()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.page_size, Size::DEFAULT);
        assert_eq!(config.default_sort, Some(Sort::default()));

        let view = View::new(
            config,
            Store::default(),
            Filter::new(),
            Number::FIRST,
            Location::new(),
        );
        assert_eq!(view.page().count, 0);
        assert_eq!(view.rows().len(), 0);
        assert!(view.stats().is_empty());
        assert_eq!(view.sort_of(Field::PublishedAt), Some(Order::Descending));
        assert_eq!(view.sort_of(Field::Price), None);
    }

    #[test]
    fn filters_whole_store() {
        let view = View::new(
            unsorted(),
            store(20, 12),
            Filter::new().with(Field::Category, "apartment"),
            Number::FIRST,
            Location::new(),
        );

        assert_eq!(view.page().count, 1);
        assert_eq!(view.page().total, 12);
        assert_eq!(view.page().index, Index::FIRST);
        assert_eq!(view.rows().len(), 12);
        assert_eq!(view.stats().total.map(|s| s.count), Some(12));
        assert_eq!(view.stats().sqm.map(|s| s.count), Some(12));
    }

    #[test]
    fn clamps_requested_page() {
        let mut view = View::new(
            unsorted(),
            store(30, 0),
            Filter::new(),
            Number::FIRST,
            Location::new(),
        );

        let page = view.execute(RequestPage(Number::from(6_i64))).unwrap();

        assert_eq!(page.index, Index::from(1_usize));
        assert_eq!(ids(view.rows()), (16..=30).collect::<Vec<_>>());
        assert_eq!(view.persistence().history(), ["?page=2"]);
    }

    #[test]
    fn honours_initial_page_with_filter() {
        let view = View::new(
            unsorted(),
            store(40, 40),
            Filter::new().with(Field::Category, "apartment"),
            Number::from(2_i64),
            Location::new(),
        );

        assert_eq!(view.page().index, Index::from(1_usize));
        assert_eq!(ids(view.rows()).first(), Some(&16));
        assert!(view.persistence().history().is_empty());
    }

    #[test]
    fn resets_page_on_filters_change() {
        let mut view = View::new(
            unsorted(),
            store(40, 20),
            Filter::new(),
            Number::from(3_i64),
            Location::new(),
        );
        assert_eq!(view.page().index, Index::from(2_usize));

        let page = view
            .execute(SetFilters(Filter::new().with(Field::Category, "house")))
            .unwrap();

        assert_eq!(page.index, Index::FIRST);
        assert_eq!(page.total, 20);
        assert_eq!(view.persistence().current(), Some("?page=1"));
    }

    #[test]
    fn replaces_filters_wholesale() {
        let mut view = View::<Location>::new(
            unsorted(),
            store(20, 12),
            Filter::new().with(Field::Category, "apartment"),
            Number::FIRST,
            Location::new(),
        );

        drop(
            view.execute(SetFilters(Filter::new().with(Field::Kind, "sale")))
                .unwrap(),
        );

        assert_eq!(view.filter().get(Field::Category), None);
        assert_eq!(view.page().total, 20);
    }

    #[test]
    fn stats_ignore_pagination() {
        let mut view = View::new(
            unsorted(),
            store(40, 0),
            Filter::new(),
            Number::FIRST,
            Location::new(),
        );
        let stats = *view.stats();

        drop(view.execute(RequestPage(Number::from(3_i64))).unwrap());

        assert_eq!(*view.stats(), stats);
        assert_eq!(stats.total.map(|s| s.count), Some(40));
        assert_eq!(stats.total.map(|s| s.max), Some(Decimal::from(40_000)));
    }

    #[test]
    fn sorts_newest_first_by_default() {
        let published = |id, at: Option<&str>| Listing {
            published_at: at
                .map(|at| DateTime::from_rfc3339(at).unwrap().coerce()),
            ..Listing::new(id, "apartment", Kind::Sale, 1)
        };
        let view = View::new(
            Config::default(),
            Store::new([
                published(1, None),
                published(2, Some("2020-01-01T00:00:00Z")),
                published(3, Some("2021-01-01T00:00:00Z")),
            ]),
            Filter::new(),
            Number::FIRST,
            Location::new(),
        );

        assert_eq!(ids(view.rows()), [3, 2, 1]);
    }

    #[test]
    fn toggles_sort_keeping_page() {
        let mut view = View::new(
            unsorted(),
            store(30, 0),
            Filter::new(),
            Number::from(2_i64),
            Location::new(),
        );

        drop(view.execute(ToggleSort(Field::Price)).unwrap());
        assert_eq!(view.sort(), Some(Sort::ascending(Field::Price)));
        assert_eq!(view.page().index, Index::from(1_usize));
        assert_eq!(ids(view.rows()).first(), Some(&16));

        drop(view.execute(ToggleSort(Field::Price)).unwrap());
        assert_eq!(view.sort_of(Field::Price), Some(Order::Descending));
        assert_eq!(ids(view.rows()).first(), Some(&15));

        drop(view.execute(ToggleSort(Field::Price)).unwrap());
        assert_eq!(view.sort(), None);
        assert!(view.persistence().history().is_empty());
    }

    #[test]
    fn replaces_listings_resetting_page() {
        let mut view = View::new(
            unsorted(),
            store(45, 0),
            Filter::new().with(Field::Kind, "sale"),
            Number::from(3_i64),
            Location::new(),
        );

        drop(view.execute(ReplaceListings(store(20, 0))).unwrap());
        assert_eq!(view.page().index, Index::FIRST);
        assert_eq!(view.page().total, 20);
        assert_eq!(view.filter().get(Field::Kind), Some("sale"));
        assert_eq!(view.persistence().history(), ["?page=1"]);

        drop(view.execute(ReplaceListings(store(45, 0))).unwrap());
        assert_eq!(view.page().index, Index::FIRST, "no jump forward");
        assert_eq!(view.stats().total.map(|s| s.count), Some(45));
        assert_eq!(view.persistence().history(), ["?page=1"]);
    }

    #[test]
    fn persists_clamped_request_once() {
        let mut view = View::new(
            unsorted(),
            store(30, 0),
            Filter::new(),
            Number::from(9_i64),
            Location::new(),
        );
        assert_eq!(view.page().index, Index::from(1_usize));
        assert!(view.persistence().history().is_empty());

        let page = view.execute(RequestPage(Number::from(9_i64))).unwrap();

        assert_eq!(page.index, Index::from(1_usize));
        assert_eq!(view.persistence().history(), ["?page=2"]);

        drop(view.execute(ToggleSort(Field::Price)).unwrap());
        drop(view.execute(RequestPage(Number::from(2_i64))).unwrap());
        assert_eq!(view.persistence().history(), ["?page=2"]);
    }

    #[test]
    fn summarizes_huge_prices() {
        let view = View::new(
            unsorted(),
            Store::new([
                Listing::new(1, "apartment", Kind::Sale, Decimal::MAX),
                Listing::new(2, "apartment", Kind::Sale, Decimal::MAX),
            ]),
            Filter::new(),
            Number::FIRST,
            Location::new(),
        );

        let total = view.stats().total.unwrap();
        assert_eq!(total.count, 2);
        assert_eq!(total.mean, Decimal::MAX);
        assert_eq!(total.median, Decimal::MAX);
    }

    #[test]
    fn filters_by_price() {
        let view = View::new(
            unsorted(),
            store(20, 0),
            Filter::from_params([("price", "3000")]),
            Number::FIRST,
            Location::new(),
        );

        assert_eq!(ids(view.rows()), [3]);
        assert_eq!(view.stats().total.map(|s| s.count), Some(1));
    }

    #[derive(Debug, Default)]
    struct Failing;

    impl Persistence<Persist<Number>> for Failing {
        type Ok = ();
        type Err = &'static str;

        fn execute(
            &mut self,
            _: Persist<Number>,
        ) -> Result<Self::Ok, Self::Err> {
            Err("storage is gone")
        }
    }

    #[test]
    fn persistence_failure_keeps_state() {
        let mut view = View::new(
            unsorted(),
            store(30, 0),
            Filter::new(),
            Number::FIRST,
            Failing,
        );

        let err = view.execute(RequestPage(Number::from(2_i64))).unwrap_err();

        assert_eq!(err.into_inner(), "storage is gone");
        assert_eq!(view.page().index, Index::from(1_usize));
        assert_eq!(ids(view.rows()).first(), Some(&16));

        assert!(view.execute(RequestPage(Number::from(2_i64))).is_ok());
    }
}
