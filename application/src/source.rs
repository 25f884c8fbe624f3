//! Loading of [`Store`]s from JSON documents.

use std::{fs, path::Path};

use engine::domain::Store;
use serde::Deserialize;

use crate::error::LoadError;

/// Accepted shapes of a JSON document with listings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    /// Bare array of listings.
    Listings(Store),

    /// Building, as it's returned by the classifieds API.
    Building {
        /// Advertised properties of the building.
        properties: Properties,
    },
}

/// Advertised properties of a building.
#[derive(Deserialize)]
struct Properties {
    /// Listings of the properties.
    results: Store,
}

impl From<Document> for Store {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Listings(store)
            | Document::Building {
                properties: Properties { results: store },
            } => store,
        }
    }
}

/// Parses a [`Store`] out of the provided JSON document.
///
/// Both a bare array of listings and a building document (with listings
/// under `properties.results`) are accepted.
///
/// # Errors
///
/// If the document is not a valid JSON of any accepted shape.
pub fn parse(json: &str) -> Result<Store, serde_json::Error> {
    serde_json::from_str::<Document>(json).map(Store::from)
}

/// Loads a [`Store`] from the JSON file at the provided `path`.
///
/// # Errors
///
/// If the file cannot be read or [parsed](parse).
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<Store, LoadError> {
    let json = fs::read_to_string(path.as_ref())?;
    let store = parse(&json)?;
    tracing::debug!(listings = store.len(), "listings loaded");
    Ok(store)
}

#[cfg(test)]
mod spec {
    use super::{load, parse};
    use crate::error::LoadError;

    #[test]
    fn parses_bare_array() {
        let store = parse(
            r#"[
                {"id": 1, "category": "apartment", "type": "sale", "price": 1},
                {"id": 2, "category": "house", "type": "rent", "price": 2}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn parses_building_document() {
        let store = parse(
            r#"{
                "id": 42,
                "address": "Main street 1",
                "properties": {
                    "count": 1,
                    "results": [
                        {
                            "id": 1,
                            "category": "apartment",
                            "type": "rent",
                            "rent_type": "monthly",
                            "price": 650,
                            "published_at": null
                        }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].category.as_str(), "apartment");
    }

    #[test]
    fn rejects_unknown_shape() {
        assert!(parse(r#"{"results": []}"#).is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn reports_missing_file() {
        let err = load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)), "{err}");
    }
}
