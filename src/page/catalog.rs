//! Lookup tables the page consumes but does not own: the feature catalog and
//! the quick-link icon set.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One language feature page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    /// Display name.
    pub feature: String,
    pub feature_link: String,
    /// Record path holding the token that implements this feature, e.g.
    /// `lineCommentToken`.
    #[serde(default)]
    pub token: Option<String>,
}

/// Feature id -> feature page.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    features: FxHashMap<String, Feature>,
}

impl FeatureCatalog {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            features: features.into_iter().map(|f| (f.id.clone(), f)).collect(),
        }
    }

    /// Load from a JSON array of features.
    pub fn from_json(json: &str) -> Result<Self> {
        let features: Vec<Feature> = serde_json::from_str(json)?;
        Ok(Self::new(features))
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.get(id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Inline SVGs for the quick-link row.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: FxHashMap<String, String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, svg: impl Into<String>) {
        self.icons.insert(key.into(), svg.into());
    }

    /// The icon for `key`, or the key itself when no icon is loaded.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.icons.get(key).map_or(key, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let catalog = FeatureCatalog::from_json(
            r#"[
                {"id": "hasLineComments", "feature": "Line Comments", "featureLink": "line-comments.html", "token": "lineCommentToken"},
                {"id": "hasMacros", "feature": "Macros", "featureLink": "macros.html"}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("hasLineComments").unwrap().token.as_deref(),
            Some("lineCommentToken")
        );
        assert_eq!(catalog.get("hasMacros").unwrap().token, None);
        assert!(catalog.get("hasGenerics").is_none());
    }

    #[test]
    fn test_bad_catalog_is_an_error() {
        assert!(FeatureCatalog::from_json("{").is_err());
    }

    #[test]
    fn test_icon_fallback() {
        let mut icons = IconSet::new();
        icons.insert("github", "<svg/>");
        assert_eq!(icons.get("github"), "<svg/>");
        assert_eq!(icons.get("reddit"), "reddit");
    }
}
