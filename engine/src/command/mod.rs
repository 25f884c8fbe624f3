//! [`Command`] definition.

pub mod replace_listings;
pub mod request_page;
pub mod set_filters;
pub mod toggle_sort;

/// [`Command`] of the [`View`].
///
/// [`View`]: crate::View
pub use common::Handler as Command;

pub use self::{
    replace_listings::ReplaceListings, request_page::RequestPage,
    set_filters::SetFilters, toggle_sort::ToggleSort,
};
