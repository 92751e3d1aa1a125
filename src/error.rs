//! Render errors.
//!
//! Missing attributes are never errors. Only knowledge-base inconsistencies
//! that break a promised link or the page title end up here.

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("bad space in title: {0}")]
    EncodedSpaceInTitle(String),

    #[error("'{id}' references unknown record '{target}' in {field}")]
    UnresolvedReference {
        id: String,
        field: &'static str,
        target: String,
    },

    #[error("invalid feature catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
