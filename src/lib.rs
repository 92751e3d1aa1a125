//! Language Page Renderer
//!
//! Renders one language page (a scroll markup document) from a single record
//! of the knowledge base.
//!
//! Layout:
//! - `store/`: indentation tree and the `AttributeStore` lookup interface
//! - `table`: delimited sub-table parsing, derived columns, serialization
//! - `page/`: fact resolvers, section builders and the page generator
//! - `config`: site constants and the process-wide current year

pub mod config;
pub mod error;
pub mod page;
pub mod store;
pub mod table;

// Re-export commonly used types
pub use config::{current_year, SiteConfig};
pub use error::RenderError;
pub use page::{
    Corpus, Feature, FeatureCatalog, IconSet, LanguagePageGenerator, LanguageRecord, Neighbors,
    RecordIndex, RecordLink, RecordMeta, RenderContext,
};
pub use store::{AttributeStore, Node};
pub use table::{parse_table, DelimitedTable, DerivedColumn, TableShape};
