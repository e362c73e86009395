use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One catalog entry: a title and the candidate images a slide may show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub title: String,
    pub images: Vec<String>,
}

impl BlockRecord {
    pub fn new<I, S>(title: impl Into<String>, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.images.is_empty() {
            return Err(CatalogError::EmptyImages {
                title: self.title.clone(),
            });
        }
        Ok(())
    }
}

/// Validates every record in order and reports the first offending position.
pub fn validate_catalog(records: &[BlockRecord]) -> Result<(), CatalogError> {
    for (position, record) in records.iter().enumerate() {
        record.validate().map_err(|source| CatalogError::InvalidRecord {
            position,
            source: Box::new(source),
        })?;
    }
    Ok(())
}
