//! [`Command`] for toggling the [`Sort`] of a [`View`].

use common::{
    operations::Persist,
    pagination::{Info, Number},
};
use derive_more::From;
use tracerr::Traced;

use crate::{domain::listing::Field, infra::Persistence, Sort, View};

use super::Command;

/// [`Command`] for toggling the [`Sort`] of a [`View`] by a [`Field`].
///
/// See [`Sort::toggle()`] for the cycle. The requested page is kept.
#[derive(Clone, Copy, Debug, From)]
pub struct ToggleSort(pub Field);

impl<P> Command<ToggleSort> for View<P>
where
    P: Persistence<Persist<Number>>,
{
    type Ok = Info;
    type Err = Traced<P::Err>;

    #[tracing::instrument(skip_all, fields(field = %cmd.0))]
    fn execute(&mut self, cmd: ToggleSort) -> Result<Self::Ok, Self::Err> {
        let ToggleSort(field) = cmd;

        self.sort = Sort::toggle(self.sort, field);
        tracing::debug!(sort = ?self.sort, "sort toggled");

        self.refresh()
    }
}
