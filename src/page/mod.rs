//! Language Page Module
//!
//! Renders a language page in scroll markup from one knowledge-base record.
//!
//! ## Parts
//! 1. Facts - ordered resolvers, one sentence (or none) per attribute group
//! 2. Sections - header, code, features and external-table builders
//! 3. Generator - fixed template joining every section
//! 4. Corpus - ranks, cross-reference index and parallel batch rendering

pub mod catalog;
pub mod corpus;
pub mod facts;
pub mod generator;
pub mod markup;
pub mod record;
pub mod sections;
pub mod types;
pub mod utils;

pub use catalog::{Feature, FeatureCatalog, IconSet};
pub use corpus::Corpus;
pub use generator::LanguagePageGenerator;
pub use record::{Example, LanguageRecord, Neighbors, RecordIndex, RecordLink, RecordMeta};
pub use types::{Facts, RenderContext};
