use crate::{
    domain::{validate_catalog, BlockRecord},
    error::CatalogError,
};

/// Route answering with the JSON block catalog.
pub const BLOCKS_PATH: &str = "/blocks";

/// The catalog served when no catalog file is configured.
pub fn reference_catalog() -> Vec<BlockRecord> {
    vec![
        BlockRecord::new(
            "Bilbao",
            ["/img/1.jpg", "/img/2.jpg", "/img/3.jpg", "/img/4.jpg"],
        ),
        BlockRecord::new(
            "Barcelona",
            ["/img/5.jpg", "/img/6.jpg", "/img/7.jpg", "/img/8.jpg"],
        ),
        BlockRecord::new("Donostia", ["/img/9.jpg", "/img/10.jpg", "/img/11.jpg"]),
    ]
}

/// Decodes a `/blocks` payload and rejects records that cannot be displayed.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<BlockRecord>, CatalogError> {
    let records: Vec<BlockRecord> = serde_json::from_slice(bytes)?;
    validate_catalog(&records)?;
    Ok(records)
}
