use std::sync::Arc;

use crate::config::ClientConfig;
use crate::provider::access_token::AccessTokenProvider;
use crate::provider::http_client::HttpClient;
use crate::provider::http_client::reqwest_client::ReqwestClient;

mod dto;
mod provider;


pub struct HTTPScenesClient {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
    token_provider: Arc<dyn AccessTokenProvider>,
}

impl HTTPScenesClient {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        config: ClientConfig,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http_client,
            config,
            token_provider,
        }
    }

    /// Client sending its requests through `reqwest`, with the configured timeout applied
    pub fn with_reqwest(
        config: ClientConfig,
        token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, crate::provider::http_client::Error> {
        let http_client = ReqwestClient::from_config(&config)?;
        Ok(Self::new(Arc::new(http_client), config, token_provider))
    }
}
