use crate::cache::QueryCache;
use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::error::AppResult;

/// Shared resources of one dashboard session: the API client and the query
/// cache the services patch after each mutation.
#[derive(Debug)]
pub struct AppState {
    pub client: ApiClient,
    pub cache: QueryCache,
}

impl AppState {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
            cache: QueryCache::new(),
        })
    }
}
