use crate::{RepositoryItem, SearchRequest, StdResult};

/// A trait for fetching one page of repositories from the search API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Sync + Send {
    /// Fetches the repositories matching the request, in ranking order.
    async fn fetch(&self, request: &SearchRequest) -> StdResult<Vec<RepositoryItem>>;
}
