use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::RwLock;

use crate::{Clock, DateFloor, RepositoryFetcher, RepositoryItem, SearchRequest, StdResult};

/// Number of days between the date floor of a search and the moment it is sent.
pub const DATE_FLOOR_WINDOW_DAYS: i64 = 30;

/// The state of the repository list
#[derive(Debug)]
pub struct ListState {
    /// The accumulated items, append-only
    items: Vec<RepositoryItem>,

    /// The page cursor, starting at 1 and only ever incremented
    page: u32,

    /// Whether a fetch is in flight
    loading: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: vec![],
            page: 1,
            loading: false,
        }
    }
}

/// Accumulates pages of repositories behind the triggers of a list screen.
///
/// Triggers borrow the controller immutably, so several of them can be awaited at the same
/// time. Nothing serializes them: overlapping fetches append their items in completion order,
/// and the loading flag is cleared by whichever fetch settles first.
pub struct ListController {
    fetcher: Arc<dyn RepositoryFetcher>,
    clock: Arc<dyn Clock>,
    state: RwLock<ListState>,
}

impl ListController {
    /// Creates a new `ListController` instance with the given fetcher and clock.
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            fetcher,
            clock,
            state: RwLock::new(ListState::default()),
        }
    }

    /// Fetches the current page, as done when the list is first shown.
    ///
    /// Returns the number of appended items.
    pub async fn load_initial(&self) -> usize {
        let page = self.page().await;
        info!("Loading repositories: page={page}");

        self.fetch_page(page).await
    }

    /// Moves the cursor to the next page and fetches it.
    ///
    /// Returns the number of appended items.
    pub async fn load_more(&self) -> usize {
        let page = {
            let mut state = self.state.write().await;
            state.page = state.page.saturating_add(1);
            state.page
        };
        info!("Loading more repositories: page={page}");

        self.fetch_page(page).await
    }

    /// Fetches the current page again and appends its items.
    ///
    /// The cursor is left untouched and the already accumulated items are kept.
    pub async fn refresh(&self) -> usize {
        let page = self.page().await;
        info!("Refreshing repositories: page={page}");

        self.fetch_page(page).await
    }

    /// Retrieves a snapshot of the accumulated items.
    pub async fn items(&self) -> Vec<RepositoryItem> {
        self.state.read().await.items.clone()
    }

    /// Retrieves a snapshot of the accumulated items along with their list keys.
    pub async fn keyed_items(&self) -> Vec<(String, RepositoryItem)> {
        let state = self.state.read().await;

        state
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.list_key(index), item.clone()))
            .collect()
    }

    /// Retrieves the page cursor.
    pub async fn page(&self) -> u32 {
        self.state.read().await.page
    }

    /// Whether a fetch is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    async fn set_loading(&self, loading: bool) {
        self.state.write().await.loading = loading;
    }

    async fn fetch_page(&self, page: u32) -> usize {
        self.set_loading(true).await;
        let total_appended = match self.fetch_items(page).await {
            Ok(items) => {
                for item in &items {
                    debug!("Fetched {item}");
                }
                let total_fetched = items.len();
                self.state.write().await.items.extend(items);

                total_fetched
            }
            Err(e) => {
                error!("Failed to fetch repositories for page {page}: {e:?}");

                0
            }
        };
        self.set_loading(false).await;

        total_appended
    }

    async fn fetch_items(&self, page: u32) -> StdResult<Vec<RepositoryItem>> {
        let date_floor = DateFloor::days_before(self.clock.now(), DATE_FLOOR_WINDOW_DAYS);
        let request = SearchRequest::try_new(page, date_floor)?;

        self.fetcher.fetch(&request).await
    }
}
