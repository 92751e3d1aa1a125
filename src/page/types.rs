//! Shared types for page generation.

use smallvec::SmallVec;

use crate::config::{current_year, SiteConfig};
use crate::page::catalog::{FeatureCatalog, IconSet};
use crate::page::record::RecordIndex;

/// Output of one fact resolver. Almost always zero or one sentence.
pub type Facts = SmallVec<[String; 1]>;

/// Everything a render reads besides the record itself.
///
/// Built once per batch and shared read-only by every page in it.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Used for "N Years Old"; identical for every page in a batch.
    pub current_year: i32,
    pub features: &'a FeatureCatalog,
    pub index: &'a dyn RecordIndex,
    pub icons: &'a IconSet,
    pub site: &'a SiteConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        features: &'a FeatureCatalog,
        index: &'a dyn RecordIndex,
        icons: &'a IconSet,
        site: &'a SiteConfig,
    ) -> Self {
        Self {
            current_year: current_year(),
            features,
            index,
            icons,
            site,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }
}
