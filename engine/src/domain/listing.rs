//! [`Listing`] definitions.

use std::cmp::Ordering;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classified ad of a realty in a building, for sale or rent.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(from = "Raw")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Category`] of the advertised realty.
    pub category: Category,

    /// [`Kind`] of the deal this [`Listing`] offers.
    pub kind: Kind,

    /// [`RentType`] of this [`Listing`].
    ///
    /// Always [`None`] unless [`Kind::Rent`].
    pub rent_type: Option<RentType>,

    /// Total [`Price`] of this [`Listing`].
    pub price: Price,

    /// [`SqmPrice`] of this [`Listing`], if known.
    pub price_per_sqm: Option<SqmPrice>,

    /// [`Area`] of the advertised realty, if known.
    pub area: Option<Area>,

    /// Number of [`Rooms`] in the advertised realty, if known.
    pub rooms: Option<Rooms>,

    /// [`DateTime`] when this [`Listing`] was published.
    ///
    /// [`None`] means it was published before publication dates started
    /// being recorded.
    pub published_at: Option<PublicationDateTime>,
}

impl Listing {
    /// Creates a new [`Listing`] with all the optional fields left unknown.
    #[must_use]
    pub fn new(
        id: u64,
        category: impl Into<Category>,
        kind: Kind,
        price: impl Into<Decimal>,
    ) -> Self {
        Self {
            id: Id(id),
            category: category.into(),
            kind,
            rent_type: None,
            price: Price(price.into()),
            price_per_sqm: None,
            area: None,
            rooms: None,
            published_at: None,
        }
    }

    /// Returns the [`Price`] of this [`Listing`], if it's known (positive).
    #[must_use]
    pub fn known_price(&self) -> Option<Price> {
        (self.price.0 > Decimal::ZERO).then_some(self.price)
    }

    /// Returns the [`SqmPrice`] of this [`Listing`], if it's known
    /// (present and positive).
    #[must_use]
    pub fn known_price_per_sqm(&self) -> Option<SqmPrice> {
        self.price_per_sqm.filter(|p| p.0 > Decimal::ZERO)
    }

    /// Returns the [`Area`] of this [`Listing`], if it's known (present and
    /// positive).
    #[must_use]
    pub fn known_area(&self) -> Option<Area> {
        self.area.filter(|a| a.0 > Decimal::ZERO)
    }

    /// Returns the [`Rooms`] of this [`Listing`], if they're known (present
    /// and positive).
    #[must_use]
    pub fn known_rooms(&self) -> Option<Rooms> {
        self.rooms.filter(|r| r.0 > 0)
    }
}

/// Shape of a [`Listing`] as it's received from upstream.
#[derive(Deserialize)]
struct Raw {
    id: Id,
    category: Category,
    #[serde(rename = "type")]
    kind: Kind,
    #[serde(default)]
    rent_type: Option<RentType>,
    #[serde(default)]
    price: Price,
    #[serde(default)]
    price_per_sqm: Option<SqmPrice>,
    #[serde(default)]
    area: Option<Area>,
    #[serde(default)]
    rooms: Option<Rooms>,
    #[serde(default, with = "common::datetime::serde::rfc3339::option")]
    published_at: Option<PublicationDateTime>,
}

impl From<Raw> for Listing {
    fn from(raw: Raw) -> Self {
        let Raw {
            id,
            category,
            kind,
            rent_type,
            price,
            price_per_sqm,
            area,
            rooms,
            published_at,
        } = raw;

        Self {
            id,
            category,
            kind,
            rent_type: rent_type.filter(|_| kind == Kind::Rent),
            price,
            price_per_sqm,
            area,
            rooms,
            published_at,
        }
    }
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Id(u64);

/// Category of a realty advertised by a [`Listing`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[as_ref(forward)]
pub struct Category(String);

impl Category {
    /// Creates a new [`Category`].
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    /// Returns this [`Category`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(category: &str) -> Self {
        Self::new(category)
    }
}

impl From<String> for Category {
    fn from(category: String) -> Self {
        Self(category)
    }
}

define_kind! {
    #[doc = "Kind of a deal offered by a [`Listing`]."]
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Kind {
        #[doc = "Realty is for sale."]
        Sale = 1,

        #[doc = "Realty is for rent."]
        Rent = 2,
    }
}

define_kind! {
    #[doc = "Period a rent [`Price`] of a [`Listing`] is paid for."]
    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "snake_case")]
    enum RentType {
        #[doc = "Price is paid daily."]
        Daily = 1,

        #[doc = "Price is paid weekly."]
        Weekly = 2,

        #[doc = "Price is paid monthly."]
        Monthly = 3,

        #[doc = "Price is paid yearly."]
        Yearly = 4,
    }
}

/// Total price of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Price(Decimal);

/// Price of a single square meter of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct SqmPrice(Decimal);

/// Area of a [`Listing`] in square meters.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Area(Decimal);

/// Number of rooms of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Rooms(u16);

/// [`DateTime`] when a [`Listing`] was published.
pub type PublicationDateTime = DateTimeOf<(Listing, unit::Publication)>;

/// Field (column) of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    /// [`Listing::category`].
    Category,

    /// [`Listing::kind`].
    #[serde(rename = "type")]
    #[strum(serialize = "type")]
    Kind,

    /// [`Listing::rent_type`].
    RentType,

    /// [`Listing::price`].
    Price,

    /// [`Listing::price_per_sqm`].
    PricePerSqm,

    /// [`Listing::area`].
    Area,

    /// [`Listing::rooms`].
    Rooms,

    /// [`Listing::published_at`].
    PublishedAt,
}

impl Field {
    /// All the [`Field`]s in their display order.
    pub const ALL: [Self; 8] = [
        Self::Category,
        Self::Kind,
        Self::RentType,
        Self::Price,
        Self::PricePerSqm,
        Self::Area,
        Self::Rooms,
        Self::PublishedAt,
    ];

    /// Returns the [`Field`]s meant to be shown to users, in their display
    /// order.
    pub fn visible() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(|f| f.is_visible())
    }

    /// Indicates whether this [`Field`] is meant to be shown to users.
    ///
    /// [`Field::RentType`] is internal: it only backs filtering and is
    /// rendered as a part of the price.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::RentType)
    }

    /// Returns the `snake_case` name of this [`Field`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Checks whether the value of this [`Field`] in the provided
    /// [`Listing`] equals to the `expected` one.
    ///
    /// Text values are compared as is, numbers by their numeric value (so
    /// `100` equals to `100.0`) and dates by the instant they denote. Unknown
    /// values and unparsable `expected` ones never match.
    #[must_use]
    pub fn matches(self, listing: &Listing, expected: &str) -> bool {
        match self {
            Self::Category => listing.category.as_str() == expected,
            Self::Kind => listing.kind.as_str() == expected,
            Self::RentType => {
                listing.rent_type.is_some_and(|r| r.as_str() == expected)
            }
            Self::Price => {
                same_number(listing.known_price().map(Into::into), expected)
            }
            Self::PricePerSqm => same_number(
                listing.known_price_per_sqm().map(Into::into),
                expected,
            ),
            Self::Area => {
                same_number(listing.known_area().map(Into::into), expected)
            }
            Self::Rooms => listing
                .known_rooms()
                .zip(expected.trim().parse::<u16>().ok())
                .is_some_and(|(rooms, n)| u16::from(rooms) == n),
            Self::PublishedAt => listing
                .published_at
                .zip(PublicationDateTime::from_rfc3339(expected.trim()).ok())
                .is_some_and(|(at, expected)| at == expected),
        }
    }

    /// Compares values of this [`Field`] in the provided [`Listing`]s in
    /// ascending order.
    ///
    /// Unknown values are less than any known one.
    #[must_use]
    pub fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            Self::Category => a.category.cmp(&b.category),
            Self::Kind => a.kind.as_str().cmp(b.kind.as_str()),
            Self::RentType => a
                .rent_type
                .map(RentType::as_str)
                .cmp(&b.rent_type.map(RentType::as_str)),
            Self::Price => a.known_price().cmp(&b.known_price()),
            Self::PricePerSqm => {
                a.known_price_per_sqm().cmp(&b.known_price_per_sqm())
            }
            Self::Area => a.known_area().cmp(&b.known_area()),
            Self::Rooms => a.known_rooms().cmp(&b.known_rooms()),
            Self::PublishedAt => a.published_at.cmp(&b.published_at),
        }
    }
}

/// Checks whether the provided known `actual` number equals to the
/// `expected` one.
fn same_number(actual: Option<Decimal>, expected: &str) -> bool {
    actual
        .zip(expected.trim().parse::<Decimal>().ok())
        .is_some_and(|(actual, expected)| actual == expected)
}
