//! [`Args`] definitions.

use std::path::PathBuf;

use clap::Parser;
use common::pagination::Number;
use engine::domain::listing::Field;

/// Viewer of a building's classifieds.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON file with the listings of a building.
    pub listings: PathBuf,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Filter to apply, as `name=value` (e.g. `category=apartment`).
    #[arg(short, long = "filter", value_parser = parse_param)]
    pub filters: Vec<(String, String)>,

    /// Field to toggle sorting by. May be repeated, each one is a toggle.
    #[arg(short, long)]
    pub sort: Vec<Field>,

    /// One-based number of the page to show.
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub page: Number,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Parses a single `name=value` parameter.
fn parse_param(param: &str) -> Result<(String, String), String> {
    param
        .split_once('=')
        .map(|(name, value)| (name.trim().to_owned(), value.trim().to_owned()))
        .ok_or_else(|| format!("expected `name=value`, got `{param}`"))
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::pagination::Number;
    use engine::domain::listing::Field;

    use super::Args;

    #[test]
    fn parses_all_options() {
        let args = Args::try_parse_from([
            "application",
            "building.json",
            "--filter",
            "category=apartment",
            "-f",
            "type=rent",
            "--sort",
            "price",
            "--sort",
            "price",
            "--page",
            "-2",
        ])
        .unwrap();

        assert_eq!(args.listings.to_str(), Some("building.json"));
        assert_eq!(args.config, "config.toml");
        assert_eq!(
            args.filters,
            [
                ("category".to_owned(), "apartment".to_owned()),
                ("type".to_owned(), "rent".to_owned()),
            ],
        );
        assert_eq!(args.sort, [Field::Price, Field::Price]);
        assert_eq!(args.page, Number::from(-2_i64));
    }

    #[test]
    fn defaults_to_first_page() {
        let args = Args::try_parse_from(["application", "b.json"]).unwrap();

        assert_eq!(args.page, Number::FIRST);
        assert!(args.filters.is_empty());
        assert!(args.sort.is_empty());
    }

    #[test]
    fn rejects_malformed_filter() {
        assert!(Args::try_parse_from([
            "application",
            "b.json",
            "--filter",
            "category",
        ])
        .is_err());
        assert!(Args::try_parse_from([
            "application",
            "b.json",
            "--sort",
            "address",
        ])
        .is_err());
    }
}
