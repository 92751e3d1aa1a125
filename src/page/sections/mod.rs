//! Section builders. Each returns its markup, or an empty string when the
//! record has nothing to show; the page template collapses the gaps.

pub mod code;
pub mod features;
pub mod header;
pub mod tables;
