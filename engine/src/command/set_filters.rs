//! [`Command`] for replacing the [`Filter`] of a [`View`].

use common::{
    operations::Persist,
    pagination::{Info, Number, Requested},
};
use derive_more::From;
use tracerr::Traced;

use crate::{infra::Persistence, Filter, View};

use super::Command;

/// [`Command`] for replacing the [`Filter`] of a [`View`].
///
/// The new [`Filter`] replaces the current one wholesale, and the requested
/// page is reset to the first one.
#[derive(Clone, Debug, From)]
pub struct SetFilters(pub Filter);

impl<P> Command<SetFilters> for View<P>
where
    P: Persistence<Persist<Number>>,
{
    type Ok = Info;
    type Err = Traced<P::Err>;

    #[tracing::instrument(skip_all, fields(
        filter = ?cmd.0,
        unconstrained = cmd.0.is_empty()
    ))]
    fn execute(&mut self, cmd: SetFilters) -> Result<Self::Ok, Self::Err> {
        let SetFilters(filter) = cmd;

        self.filter = filter;
        self.requested = Requested::FIRST;

        self.refresh()
    }
}
