use std::{io, sync::OnceLock};

use application::{render, source, Args, Config};
use engine::{
    command::ToggleSort, infra::Location, Command as _, Filter, View,
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    if start().is_err() {
        std::process::exit(1);
    }
}

fn start() -> Result<(), ()> {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => {
            // `--help` and `--version` land here.
            drop(e.print());
            return Ok(());
        }
        Err(e) => {
            log::error!("failed to parse command line arguments: {e}");
            return Err(());
        }
    };
    let Args {
        listings,
        config,
        filters,
        sort,
        page,
    } = args;

    let Config { view, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let store = source::load(&listings).map_err(|e| {
        log::error!("failed to load `{}`: {e}", listings.display());
    })?;

    let mut view = View::new(
        view.into(),
        store,
        Filter::from_params(filters),
        page,
        Location::new(),
    );
    for field in sort {
        view.execute(ToggleSort(field)).map(drop).map_err(|e| {
            log::error!("failed to sort by `{field}`: {e}");
        })?;
    }

    println!("{}", render::render(&view));

    if let Some(location) = view.persistence().current() {
        log::info!("page moved to `{location}`");
    }

    Ok(())
}
