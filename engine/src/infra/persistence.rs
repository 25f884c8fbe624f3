//! [`Persistence`]-related implementations.

use std::convert::Infallible;

use common::{operations::Persist, pagination::Number};

/// Persistence of [`View`] state outside of the current process.
///
/// [`View`]: crate::View
pub use common::Handler as Persistence;

/// [`Persistence`] dropping everything it's given.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl<T> Persistence<Persist<T>> for Discard {
    type Ok = ();
    type Err = Infallible;

    fn execute(&mut self, _: Persist<T>) -> Result<Self::Ok, Self::Err> {
        Ok(())
    }
}

/// [`Persistence`] keeping a navigation history of `?page=N` locations.
///
/// Every persisted page [`Number`] pushes a new location, the same way a
/// router does.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Location {
    /// Pushed locations, the latest one last.
    history: Vec<String>,
}

impl Location {
    /// Name of the query parameter holding a page [`Number`].
    pub const PAGE_PARAM: &'static str = "page";

    /// Creates a new empty [`Location`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current (latest pushed) location, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Returns all the pushed locations, the latest one last.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Persistence<Persist<Number>> for Location {
    type Ok = ();
    type Err = Infallible;

    fn execute(
        &mut self,
        Persist(page): Persist<Number>,
    ) -> Result<Self::Ok, Self::Err> {
        let location = format!("?{}={page}", Self::PAGE_PARAM);
        tracing::debug!(%location, "pushing location");
        self.history.push(location);
        Ok(())
    }
}
