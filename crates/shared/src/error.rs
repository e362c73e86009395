use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("block '{title}' has no images to choose from")]
    EmptyImages { title: String },
    #[error("catalog record #{position} is invalid: {source}")]
    InvalidRecord {
        position: usize,
        #[source]
        source: Box<CatalogError>,
    },
    #[error("catalog is not a JSON array of blocks: {0}")]
    Malformed(#[from] serde_json::Error),
}
