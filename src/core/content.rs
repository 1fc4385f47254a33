use crate::config::toml_config::{AboutConfig, ContactConfig, HomeConfig, SiteInfo};
use crate::core::cursor::{Cursor, StageCursor};
use crate::core::sequence::{Sequence, StageCollection};
use crate::domain::model::{Feature, GalleryImage, Highlight, RelatedCard, SpecRow};
use std::sync::Arc;

/// Validated, read-only content for every page. Built once at startup by
/// [`SiteConfig::into_content`](crate::config::toml_config::SiteConfig::into_content).
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub home: HomeConfig,
    pub journey: JourneyContent,
    pub product: ProductContent,
    pub about: AboutConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone)]
pub struct JourneyContent {
    pub heading: String,
    pub intro: String,
    pub stages: Arc<StageCollection>,
    pub facts: Vec<Highlight>,
}

#[derive(Debug, Clone)]
pub struct ProductContent {
    pub name: String,
    pub description: String,
    pub price: String,
    /// Filled stars out of five.
    pub rating: u8,
    pub review: Option<String>,
    pub gallery: Arc<Sequence<GalleryImage>>,
    pub features: Vec<Feature>,
    pub specs: Vec<SpecRow>,
    pub related: Vec<RelatedCard>,
}

impl SiteContent {
    /// A fresh cursor for a new journey view session.
    pub fn stage_cursor(&self) -> StageCursor {
        Cursor::new(Arc::clone(&self.journey.stages))
    }

    pub fn gallery_cursor(&self) -> Cursor<GalleryImage> {
        Cursor::new(Arc::clone(&self.product.gallery))
    }
}
