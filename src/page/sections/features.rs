//! Language features table.
//!
//! Data Sources:
//! - Record: `features` group, one `<featureId> true|false` child each,
//!   optionally holding an example block
//! - Catalog: display name, link and token path per feature id

use tracing::warn;

use crate::page::catalog::FeatureCatalog;
use crate::page::markup::{indent, Directive};
use crate::page::record::LanguageRecord;
use crate::store::AttributeStore;
use crate::table::{DelimitedTable, Row};

const SUPPORTED: &str = "✓";
const UNSUPPORTED: &str = "ϴ";

const COLUMNS: &[&str] = &["Feature", "FeatureLink", "Supported", "Example", "Token"];

/// Rows for every catalogued feature, plus the ids missing from the catalog.
///
/// Rows with an example come first; within each half supported rows lead.
pub fn feature_rows<'a>(
    record: &'a LanguageRecord,
    catalog: &FeatureCatalog,
) -> (DelimitedTable, Vec<&'a str>) {
    let mut table = DelimitedTable::default();
    let mut skipped = Vec::new();

    let group = match record.get_group("features") {
        Some(group) => group,
        None => return (table, skipped),
    };

    for node in group.children() {
        let id = node.key();
        let feature = match catalog.get(id) {
            Some(feature) => feature,
            None => {
                warn!(
                    id = record.id(),
                    feature = id,
                    "we need a features page for this feature"
                );
                skipped.push(id);
                continue;
            }
        };

        let supported = node.content() == Some("true");
        let token = match (&feature.token, supported) {
            (Some(path), true) => record.get_scalar(path).unwrap_or(""),
            _ => "",
        };

        table.push(
            Row::new()
                .with("Feature", feature.feature.as_str())
                .with("FeatureLink", feature.feature_link.as_str())
                .with("Supported", if supported { SUPPORTED } else { UNSUPPORTED })
                .with("Example", node.children_to_string())
                .with("Token", token),
        );
    }

    table.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    table.reverse();
    (table, skipped)
}

fn sort_key(row: &Row) -> (bool, bool) {
    (
        row.non_empty("Example").is_some(),
        row.get("Supported") == Some(SUPPORTED),
    )
}

/// The heading is only emitted when at least one row survives.
pub fn features(record: &LanguageRecord, catalog: &FeatureCatalog) -> String {
    let (table, _) = feature_rows(record, catalog);
    if table.is_empty() {
        return String::new();
    }
    format!(
        "## Language <a href=\"../lists/features.html\">features</a>\n\n{}\n{}",
        Directive::TreeTable,
        indent(&table.to_tree(COLUMNS, &["Example"]))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::catalog::Feature;
    use crate::page::facts::test_support::WarnCounter;

    fn catalog() -> FeatureCatalog {
        let feature = |id: &str, name: &str, token: Option<&str>| Feature {
            id: id.to_string(),
            feature: name.to_string(),
            feature_link: format!("{}.html", id),
            token: token.map(str::to_string),
        };
        FeatureCatalog::new(vec![
            feature("hasComments", "Comments", None),
            feature("hasLineComments", "Line Comments", Some("lineCommentToken")),
            feature("hasMacros", "Macros", None),
        ])
    }

    #[test]
    fn test_example_dominates_sort() {
        let record = LanguageRecord::parse(
            "x",
            "features\n hasComments true\n  # a\n hasMacros false\n  m!()\n hasLineComments true",
        );
        let (table, skipped) = feature_rows(&record, &catalog());
        assert!(skipped.is_empty());
        let order: Vec<_> = table.rows().iter().map(|r| r.get("Feature").unwrap_or("")).collect();
        assert_eq!(order, vec!["Comments", "Macros", "Line Comments"]);
    }

    #[test]
    fn test_unknown_feature_is_skipped() {
        let record = LanguageRecord::parse("x", "features\n hasGenerics true\n hasMacros true");
        let (table, skipped) = feature_rows(&record, &catalog());
        assert_eq!(skipped, vec!["hasGenerics"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_token_only_for_supported_features() {
        let record = LanguageRecord::parse(
            "python",
            "lineCommentToken #\nfeatures\n hasLineComments true",
        );
        let (table, _) = feature_rows(&record, &catalog());
        assert_eq!(table.rows()[0].get("Token"), Some("#"));

        let record = LanguageRecord::parse(
            "python",
            "lineCommentToken #\nfeatures\n hasLineComments false",
        );
        let (table, _) = feature_rows(&record, &catalog());
        assert_eq!(table.rows()[0].get("Token"), Some(""));
        assert_eq!(table.rows()[0].get("Supported"), Some(UNSUPPORTED));
    }

    #[test]
    fn test_section_markup() {
        let record = LanguageRecord::parse("x", "features\n hasComments true\n  # a");
        assert_eq!(
            features(&record, &catalog()),
            "## Language <a href=\"../lists/features.html\">features</a>\n\ntreeTable\n row\n  Feature Comments\n  FeatureLink hasComments.html\n  Supported ✓\n  Example\n   # a\n  Token"
        );
        assert_eq!(features(&LanguageRecord::parse("x", ""), &catalog()), "");
    }

    #[test]
    fn test_no_known_features_omits_section() {
        let record = LanguageRecord::parse("x", "features\n hasTypeClasses true");
        let counter = WarnCounter::default();
        assert_eq!(counter.run(|| features(&record, &catalog())), "");
        assert_eq!(counter.count(), 1);
        let record = LanguageRecord::parse("x", "features");
        assert_eq!(features(&record, &catalog()), "");
    }
}
