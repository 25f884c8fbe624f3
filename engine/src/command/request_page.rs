//! [`Command`] for requesting a page of a [`View`].

use common::{
    operations::Persist,
    pagination::{Info, Number, Requested},
};
use derive_more::From;
use tracerr::Traced;

use crate::{infra::Persistence, View};

use super::Command;

/// [`Command`] for requesting a page of a [`View`] by its one-based
/// [`Number`].
///
/// Out of range [`Number`]s are clamped into the existing pages.
#[derive(Clone, Copy, Debug, From)]
pub struct RequestPage(pub Number);

impl<P> Command<RequestPage> for View<P>
where
    P: Persistence<Persist<Number>>,
{
    type Ok = Info;
    type Err = Traced<P::Err>;

    #[tracing::instrument(skip_all, fields(page = %cmd.0))]
    fn execute(&mut self, cmd: RequestPage) -> Result<Self::Ok, Self::Err> {
        let RequestPage(page) = cmd;

        self.requested = Requested::from(page);

        self.refresh()
    }
}
