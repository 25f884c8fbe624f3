//! [`Config`]-related definitions.

use common::pagination;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use engine::Sort;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Config {
    /// View configuration.
    #[serde(default)]
    pub view: View,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        Self::load(
            ConfigBuilder::<DefaultState>::default()
                .add_source(
                    config::File::with_name(path.as_ref()).required(false),
                )
                .add_source(
                    config::Environment::with_prefix("CONF").separator("."),
                ),
        )
    }

    /// Builds a [`Config`] out of the provided sources.
    fn load(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

/// View configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct View {
    /// Number of listings in a single page.
    pub page_size: pagination::Size,

    /// Sorting to start with.
    #[default(Some(Sort::default()))]
    pub sort: Option<Sort>,
}

impl From<View> for engine::Config {
    fn from(value: View) -> Self {
        let View { page_size, sort } = value;
        Self {
            page_size,
            default_sort: sort,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Maximum level of the emitted log records.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Everything, including the view recomputation details.
    Trace,

    /// Diagnostics of filtering, sorting and pagination.
    Debug,

    /// Regular progress.
    #[default]
    Info,

    /// Recoverable anomalies, like duplicated listings.
    Warn,

    /// Failures only.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use common::{pagination::Size, Order};
    use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
    use engine::{domain::listing::Field, Sort};

    use super::{Config, LogLevel};

    fn from_toml(toml: &str) -> Config {
        Config::load(
            ConfigBuilder::<DefaultState>::default()
                .add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn defaults() {
        let config = from_toml("");

        assert_eq!(config.view.page_size, Size::DEFAULT);
        assert_eq!(config.view.sort, Some(Sort::default()));
        assert_eq!(config.log.level, LogLevel::Info);
    }

    #[test]
    fn overrides() {
        let config = from_toml(
            r#"
            [view]
            page_size = 25
            sort = { field = "price_per_sqm", order = "ascending" }

            [log]
            level = "DEBUG"
            "#,
        );

        assert_eq!(config.view.page_size.get(), 25);
        assert_eq!(
            config.view.sort,
            Some(Sort {
                field: Field::PricePerSqm,
                order: Order::Ascending,
            }),
        );
        assert_eq!(config.log.level, LogLevel::Debug);

        let engine = engine::Config::from(config.view);
        assert_eq!(engine.default_sort.map(|s| s.field), Some(Field::PricePerSqm));
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = Config::load(
            ConfigBuilder::<DefaultState>::default()
                .add_source(File::from_str("[view]\npage_size = 0", FileFormat::Toml)),
        );

        assert!(result.is_err());
    }
}
