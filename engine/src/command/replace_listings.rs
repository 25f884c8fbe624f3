//! [`Command`] for replacing the [`Store`] of a [`View`].

use common::{
    operations::Persist,
    pagination::{Info, Number, Requested},
};
use derive_more::From;
use tracerr::Traced;

use crate::{domain::Store, infra::Persistence, View};

use super::Command;

/// [`Command`] for replacing the [`Store`] of a [`View`], once fresh
/// [`Listing`]s arrive.
///
/// The current [`Filter`] and [`Sort`] are kept, while the requested page is
/// reset to the first one, as the old page position means nothing among the
/// new [`Listing`]s.
///
/// [`Filter`]: crate::Filter
/// [`Listing`]: crate::domain::Listing
/// [`Sort`]: crate::Sort
#[derive(Clone, Debug, From)]
pub struct ReplaceListings(pub Store);

impl<P> Command<ReplaceListings> for View<P>
where
    P: Persistence<Persist<Number>>,
{
    type Ok = Info;
    type Err = Traced<P::Err>;

    #[tracing::instrument(skip_all, fields(listings = cmd.0.len()))]
    fn execute(
        &mut self,
        cmd: ReplaceListings,
    ) -> Result<Self::Ok, Self::Err> {
        let ReplaceListings(store) = cmd;

        self.store = store;
        self.requested = Requested::FIRST;

        self.refresh()
    }
}
