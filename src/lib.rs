//! Lists the most starred GitHub repositories created during the last thirty days.
//!
//! A [`ListController`] accumulates pages fetched by a [`RepositoryFetcher`] and exposes the
//! triggers of a paginated, pull-to-refresh list: initial load, load more and refresh.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;
