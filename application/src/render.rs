//! Plain-text rendering of a [`View`].

use common::{pagination::Info, Order};
use engine::{
    domain::{
        listing::{Field, Kind, RentType},
        Listing,
    },
    stats::Summary,
    Stats, View,
};
use itertools::Itertools as _;
use rust_decimal::{Decimal, RoundingStrategy};
use time::macros::format_description;

/// Message shown instead of rows when nothing matches the filters.
pub const NO_RESULTS: &str = "No classifieds could be found with the given \
                              filters. Clear the filters or open a different \
                              property to see data.";

/// Text shown for listings published before dates were recorded.
pub const UNKNOWN_PUBLICATION: &str = "Before 2018";

/// Separator of table columns.
const COLUMN_SEPARATOR: &str = " | ";

/// Renders the current state of the provided [`View`].
///
/// Consists of the stats panel (only if the page has rows), the table of
/// the current page and the pagination footer (only if there are several
/// pages).
#[must_use]
pub fn render<P>(view: &View<P>) -> String {
    let rows = view.rows().collect::<Vec<_>>();

    let mut sections = Vec::with_capacity(3);
    if !rows.is_empty() {
        sections.push(stats(view.stats()));
    }
    sections.push(table(view, &rows));
    if let Some(footer) = footer(view.page()) {
        sections.push(footer);
    }
    sections.join("\n\n")
}

/// Renders the stats panel.
#[must_use]
pub fn stats(stats: &Stats) -> String {
    [
        summary("Total price", stats.total.as_ref(), "€"),
        summary("SQM price", stats.sqm.as_ref(), "€/m²"),
    ]
    .join("\n")
}

/// Renders a single line of the stats panel.
fn summary(title: &str, summary: Option<&Summary>, unit: &str) -> String {
    let Some(s) = summary else {
        return format!("{title}: no data");
    };
    let amount = |v: Decimal| format!("{} {unit}", v.round_dp(2).normalize());
    format!(
        "{title}: {} listings, min {}, mean {}, median {}, max {}",
        s.count,
        amount(s.min),
        amount(s.mean),
        amount(s.median),
        amount(s.max),
    )
}

/// Renders the table of the provided `rows` with the header of the
/// [`View`] columns.
fn table<P>(view: &View<P>, rows: &[&Listing]) -> String {
    let fields = Field::visible().collect::<Vec<_>>();

    let header = fields
        .iter()
        .map(|&f| match view.sort_of(f) {
            Some(Order::Ascending) => format!("{} ^", title(f)),
            Some(Order::Descending) => format!("{} v", title(f)),
            None => title(f).to_owned(),
        })
        .collect::<Vec<_>>();
    let cells = rows
        .iter()
        .map(|l| fields.iter().map(|&f| cell(f, l)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let widths = fields
        .iter()
        .enumerate()
        .map(|(i, _)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain([header[i].chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let line = |values: &[String]| {
        fields
            .iter()
            .zip(values)
            .zip(&widths)
            .map(|((&f, v), &w)| {
                if is_left_aligned(f) {
                    format!("{v:<w$}")
                } else {
                    format!("{v:>w$}")
                }
            })
            .join(COLUMN_SEPARATOR)
            .trim_end()
            .to_owned()
    };

    let mut lines = vec![
        line(&header),
        widths.iter().map(|&w| "-".repeat(w)).join("-+-"),
    ];
    if cells.is_empty() {
        lines.push(NO_RESULTS.to_owned());
    } else {
        lines.extend(cells.iter().map(|row| line(row)));
    }
    lines.join("\n")
}

/// Renders the pagination footer, if there is more than one page.
#[must_use]
pub fn footer(page: Info) -> Option<String> {
    (page.count > 1)
        .then(|| format!("Page {} of {}", page.number(), page.count))
}

/// Returns the column title of the provided [`Field`].
#[must_use]
pub fn title(field: Field) -> &'static str {
    match field {
        Field::Category => "Category",
        Field::Kind => "Type",
        Field::RentType => "Rent type",
        Field::Price => "Total price",
        Field::PricePerSqm => "SQM Price",
        Field::Area => "Area",
        Field::Rooms => "Rooms",
        Field::PublishedAt => "Published at",
    }
}

/// Indicates whether the provided [`Field`] holds text rather than
/// numbers.
fn is_left_aligned(field: Field) -> bool {
    matches!(field, Field::Category | Field::Kind)
}

/// Renders the cell of the provided [`Field`] of a [`Listing`].
///
/// Unknown values are rendered empty.
#[must_use]
pub fn cell(field: Field, listing: &Listing) -> String {
    match field {
        Field::Category => listing.category.to_string(),
        Field::Kind => listing.kind.to_string(),
        Field::RentType => {
            listing.rent_type.map(|r| r.to_string()).unwrap_or_default()
        }
        Field::Price => {
            let suffix = match (listing.kind, listing.rent_type) {
                (Kind::Rent, Some(r)) => rent_suffix(r),
                (Kind::Rent | Kind::Sale, _) => "",
            };
            format!("{} €{suffix}", listing.price)
        }
        Field::PricePerSqm => listing
            .known_price_per_sqm()
            .map(|p| {
                let rounded = Decimal::from(p).round_dp_with_strategy(
                    0,
                    RoundingStrategy::MidpointAwayFromZero,
                );
                format!("{rounded} €/m²")
            })
            .unwrap_or_default(),
        Field::Area => listing
            .known_area()
            .map(|a| format!("{a} m²"))
            .unwrap_or_default(),
        Field::Rooms => listing
            .known_rooms()
            .map(|r| r.to_string())
            .unwrap_or_default(),
        Field::PublishedAt => listing.published_at.map_or_else(
            || UNKNOWN_PUBLICATION.to_owned(),
            |at| {
                at.format(format_description!(
                    "[year]-[month]-[day] [hour]:[minute]"
                ))
                .unwrap_or_else(|_| at.to_rfc3339())
            },
        ),
    }
}

/// Returns the price suffix of the provided [`RentType`].
const fn rent_suffix(rent_type: RentType) -> &'static str {
    match rent_type {
        RentType::Yearly => "/y",
        RentType::Monthly => "/m",
        RentType::Weekly => "/w",
        RentType::Daily => "/d",
    }
}
