//! Hierarchical attribute store.
//!
//! Records arrive as indentation trees. Attributes are addressed by
//! space-separated paths (`githubRepo stars`) and any path may be absent.

pub mod node;

pub use node::Node;

/// Read-only path lookup over one record.
///
/// `get_group` and `get_all_groups` are required; the scalar and
/// multi-value lookups are answered from the nodes they return.
pub trait AttributeStore {
    /// The node at `path`, if present.
    fn get_group(&self, path: &str) -> Option<&Node>;

    /// Every node directly under the parent of `path` whose key matches the
    /// last path segment, in source order.
    fn get_all_groups(&self, path: &str) -> Vec<&Node>;

    /// Content of the node at `path`. Present-but-empty counts as absent.
    fn get_scalar(&self, path: &str) -> Option<&str> {
        self.get_group(path)
            .and_then(Node::content)
            .filter(|s| !s.is_empty())
    }

    /// All non-empty values of a repeated attribute, in source order.
    fn get_all_values(&self, path: &str) -> Vec<&str> {
        self.get_all_groups(path)
            .into_iter()
            .filter_map(Node::content)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn has(&self, path: &str) -> bool {
        self.get_group(path).is_some()
    }

    /// Latest value of a year-keyed series such as
    ///
    /// ```text
    /// subreddit https://reddit.com/r/rust
    ///  memberCount
    ///   2021 180000
    ///   2022 223000
    /// ```
    fn most_recent_int(&self, path: &str) -> Option<i64> {
        let group = self.get_group(path)?;
        group
            .children()
            .iter()
            .filter_map(|row| {
                let year = row.word(0)?.parse::<i64>().ok()?;
                let value = row.word(1)?.replace(',', "").parse::<i64>().ok()?;
                Some((year, value))
            })
            .max_by_key(|(year, _)| *year)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "title Rust
documentation https://doc.rust-lang.org
documentation https://docs.rs
githubRepo https://github.com/rust-lang/rust
 stars 90000
 description
subreddit https://reddit.com/r/rust
 memberCount
  2022 223,000
  2021 180000";

    #[test]
    fn test_scalar_lookup() {
        let node = Node::parse(RECORD);
        assert_eq!(node.get_scalar("title"), Some("Rust"));
        assert_eq!(node.get_scalar("githubRepo stars"), Some("90000"));
        assert_eq!(node.get_scalar("githubRepo description"), None);
        assert_eq!(node.get_scalar("githubRepo forks"), None);
        assert!(node.has("githubRepo description"));
    }

    #[test]
    fn test_repeated_values() {
        let node = Node::parse(RECORD);
        assert_eq!(
            node.get_all_values("documentation"),
            vec!["https://doc.rust-lang.org", "https://docs.rs"]
        );
        assert!(node.get_all_values("spec").is_empty());
    }

    #[test]
    fn test_most_recent_int() {
        let node = Node::parse(RECORD);
        assert_eq!(node.most_recent_int("subreddit memberCount"), Some(223_000));
        assert_eq!(node.most_recent_int("projectEuler memberCount"), None);
    }
}
