use rand::{seq::IndexedRandom, Rng};
use shared::{domain::BlockRecord, error::CatalogError};

/// A rendered slide: the block title and four images drawn from the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub img1: String,
    pub img2: String,
    pub img3: String,
    pub img4: String,
}

impl DisplayItem {
    /// Draws each image slot independently and uniformly, with replacement.
    pub fn from_record<R: Rng + ?Sized>(
        record: &BlockRecord,
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        let mut pick = || {
            record
                .images
                .choose(&mut *rng)
                .cloned()
                .ok_or_else(|| CatalogError::EmptyImages {
                    title: record.title.clone(),
                })
        };

        Ok(Self {
            title: record.title.clone(),
            img1: pick()?,
            img2: pick()?,
            img3: pick()?,
            img4: pick()?,
        })
    }

    pub fn images(&self) -> [&str; 4] {
        [&self.img1, &self.img2, &self.img3, &self.img4]
    }
}
