use shared::error::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server url '{url}': {source}")]
    InvalidServerUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned an unusable catalog: {0}")]
    Catalog(#[from] CatalogError),
}
