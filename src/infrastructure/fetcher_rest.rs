use anyhow::Context;
use log::debug;
use reqwest::{Client, header::ACCEPT};
use serde::Deserialize;

use crate::{FetcherError, RepositoryFetcher, RepositoryItem, SearchRequest, StdResult};

/// The REST production endpoint for GitHub.
pub const GITHUB_API_ENDPOINT: &str = "https://api.github.com";

const SEARCH_REPOSITORIES_PATH: &str = "/search/repositories";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize, Debug)]
struct SearchRepositoriesData {
    items: Vec<RepositoryRecord>,
}

#[derive(Deserialize, Debug)]
struct RepositoryRecord {
    name: String,
    description: Option<String>,
    stargazers_count: u64,
    owner: OwnerRecord,
}

#[derive(Deserialize, Debug)]
struct OwnerRecord {
    login: String,
    avatar_url: String,
}

impl From<RepositoryRecord> for RepositoryItem {
    fn from(record: RepositoryRecord) -> Self {
        RepositoryItem::new(
            &record.name,
            record.description.as_deref(),
            record.stargazers_count,
            &record.owner.login,
            &record.owner.avatar_url,
        )
    }
}

/// Fetches repositories from the unauthenticated GitHub REST search API.
pub struct RestFetcher {
    client: Client,
    search_url: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance targeting the given API base URL.
    pub fn try_new(endpoint: &str) -> StdResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to build HTTP client")?;
        let search_url = format!(
            "{}{SEARCH_REPOSITORIES_PATH}",
            endpoint.trim_end_matches('/')
        );

        Ok(Self { client, search_url })
    }

    async fn fetch_search_page(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchRepositoriesData, FetcherError> {
        let response = self
            .client
            .get(&self.search_url)
            .header(ACCEPT, "application/vnd.github+json")
            .query(&request.query_parameters())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetcherError::Remote(format!(
                "Search API answered with status {status}: {body}"
            )));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self, request: &SearchRequest) -> StdResult<Vec<RepositoryItem>> {
        debug!("Sending {request}");
        let fetched_data = self.fetch_search_page(request).await?;

        Ok(fetched_data
            .items
            .into_iter()
            .map(RepositoryItem::from)
            .collect())
    }
}
