use reqwest::Client;
use shared::{
    domain::BlockRecord,
    protocol::{parse_catalog, BLOCKS_PATH},
};
use tracing::info;
use url::Url;

use crate::error::ClientError;

/// One-shot reader of the server's block catalog. No retries.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    blocks_url: Url,
}

impl CatalogClient {
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        let raw = format!("{}{}", server_url.trim_end_matches('/'), BLOCKS_PATH);
        let blocks_url = Url::parse(&raw).map_err(|source| ClientError::InvalidServerUrl {
            url: server_url.to_string(),
            source,
        })?;
        Ok(Self {
            http: Client::new(),
            blocks_url,
        })
    }

    pub fn blocks_url(&self) -> &Url {
        &self.blocks_url
    }

    pub async fn fetch_blocks(&self) -> Result<Vec<BlockRecord>, ClientError> {
        let res = self
            .http
            .get(self.blocks_url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = res.bytes().await?;
        let records = parse_catalog(&body)?;
        info!(url = %self.blocks_url, blocks = records.len(), "fetched block catalog");
        Ok(records)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
