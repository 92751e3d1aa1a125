//! Language record and cross-reference types.
//!
//! Data Sources:
//! - Attributes: one `.pldb` indentation tree per record
//! - Ranks: assigned by `Corpus` from batch order
//! - Counts: estimated from the record's own sub-tables (`RecordMeta`)

use crate::page::utils::parse_number;
use crate::store::{AttributeStore, Node};
use crate::table::{DelimitedTable, TableShape};

/// Display link for another record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLink {
    pub permalink: String,
    pub title: String,
}

impl RecordLink {
    pub fn anchor(&self) -> String {
        format!("<a href=\"{}\">{}</a>", self.permalink, self.title)
    }
}

/// Resolves record ids to display links.
pub trait RecordIndex: Sync {
    fn lookup(&self, id: &str) -> Option<RecordLink>;
}

/// Permalinks of the records ranked just before and after this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub previous: String,
    pub next: String,
}

/// Figures computed outside the record's own attributes.
#[derive(Debug, Clone, Default)]
pub struct RecordMeta {
    /// Zero-based rank across all records.
    pub rank: usize,
    /// Zero-based rank across language records only.
    pub language_rank: usize,
    /// Tooltip explaining the language rank.
    pub rank_note: Option<String>,
    /// Crude user estimate.
    pub users: Option<f64>,
    pub book_count: usize,
    pub paper_count: usize,
    pub job_count: Option<f64>,
    pub repo_count: Option<f64>,
}

impl RecordMeta {
    /// Estimate counts from the record's own sub-tables. Ranks stay zero
    /// until a `Corpus` assigns them.
    pub fn from_record(tree: &Node) -> Self {
        let rows = |path: &str, shape| {
            DelimitedTable::from_group(tree.get_group(path), shape).map_or(0, |t| t.len())
        };

        let dblp_hits = tree
            .get_scalar("dblp hits")
            .and_then(parse_number)
            .unwrap_or(0.0) as usize;

        let repo_count = tree
            .get_scalar("githubLanguage repos")
            .or_else(|| tree.get_scalar("githubBigQuery repos"))
            .and_then(parse_number);

        Self {
            users: estimate_users(tree),
            book_count: rows("isbndb", TableShape::Pipe) + rows("goodreads", TableShape::Pipe),
            paper_count: rows("semanticScholar", TableShape::Pipe) + dblp_hits,
            job_count: tree.most_recent_int("indeedJobs").map(|n| n as f64),
            repo_count,
            ..Self::default()
        }
    }
}

/// Weight per user signal. Community sizes count one user per member; the
/// survey is a sample of developers, so its users scale up.
const USER_SIGNALS: &[(&str, f64)] = &[
    ("subreddit memberCount", 1.0),
    ("projectEuler memberCount", 1.0),
    ("meetup memberCount", 1.0),
    ("githubRepo stars", 1.0),
    ("githubBigQuery users", 1.0),
];
const SURVEY_USER_WEIGHT: f64 = 20.0;

/// Crude linear user estimate over community and survey signals. `None`
/// when the record carries none of them.
fn estimate_users(tree: &Node) -> Option<f64> {
    let signal = |path: &str| {
        tree.most_recent_int(path)
            .map(|n| n as f64)
            .or_else(|| tree.get_scalar(path).and_then(parse_number))
    };

    let survey_users = tree
        .get_group("stackOverflowSurvey")
        .and_then(|survey| {
            survey
                .children()
                .iter()
                .filter_map(|node| node.key().parse::<i32>().ok().map(|year| (year, node)))
                .max_by_key(|(year, _)| *year)
        })
        .and_then(|(_, node)| node.get_scalar("users").and_then(parse_number));

    let mut found = false;
    let mut total = 0.0;
    for (path, weight) in USER_SIGNALS {
        if let Some(value) = signal(path) {
            found = true;
            total += value * weight;
        }
    }
    if let Some(users) = survey_users {
        found = true;
        total += users * SURVEY_USER_WEIGHT;
    }
    found.then_some(total)
}

/// One code sample and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub source: String,
    pub link: Option<String>,
    pub code: String,
}

/// Type code -> (display name, counts as a language).
const TYPES: &[(&str, &str, bool)] = &[
    ("pl", "programming language", true),
    ("esolang", "esoteric programming language", true),
    ("visual", "visual programming language", true),
    ("textMarkup", "text markup language", true),
    ("dataNotation", "data notation", true),
    ("grammarLanguage", "grammar language", true),
    ("queryLanguage", "query language", true),
    ("stylesheetLanguage", "stylesheet language", true),
    ("template", "template language", true),
    ("idl", "interface design language", true),
    ("assembly", "assembly language", true),
    ("hashiCorpConfig", "configuration language", true),
    ("binaryDataFormat", "binary data format", false),
    ("protocol", "protocol", false),
    ("library", "library", false),
    ("application", "application", false),
    ("os", "operating system", false),
    ("editor", "editor", false),
    ("compiler", "compiler", false),
    ("vm", "virtual machine", false),
    ("filesystem", "file system", false),
    ("standard", "standard", false),
    ("feature", "language feature", false),
];

/// A record being rendered.
#[derive(Debug, Clone)]
pub struct LanguageRecord {
    id: String,
    tree: Node,
    meta: RecordMeta,
}

impl LanguageRecord {
    pub fn new(id: impl Into<String>, tree: Node) -> Self {
        let meta = RecordMeta::from_record(&tree);
        Self {
            id: id.into(),
            tree,
            meta,
        }
    }

    pub fn parse(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, Node::parse(text))
    }

    pub fn with_meta(mut self, meta: RecordMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tree(&self) -> &Node {
        &self.tree
    }

    pub fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    /// Display title, falling back to the id.
    pub fn title(&self) -> &str {
        self.get_scalar("title").unwrap_or(self.id.as_str())
    }

    pub fn permalink(&self) -> String {
        format!("{}.html", self.id)
    }

    pub fn link(&self) -> RecordLink {
        RecordLink {
            permalink: self.permalink(),
            title: self.title().to_string(),
        }
    }

    pub fn type_code(&self) -> Option<&str> {
        self.get_scalar("type")
    }

    /// Display name of the type; unknown codes are shown as-is.
    pub fn type_name(&self) -> Option<&str> {
        let code = self.type_code()?;
        Some(
            TYPES
                .iter()
                .find(|(c, _, _)| *c == code)
                .map_or(code, |(_, name, _)| *name),
        )
    }

    pub fn is_language(&self) -> bool {
        self.type_code()
            .and_then(|code| TYPES.iter().find(|(c, _, _)| *c == code))
            .is_some_and(|(_, _, language)| *language)
    }

    pub fn appeared(&self) -> Option<i32> {
        self.get_scalar("appeared")?.trim().parse().ok()
    }

    pub fn creators(&self) -> Vec<&str> {
        split_list(self.get_scalar("creators"), " and ")
    }

    pub fn website(&self) -> Option<&str> {
        self.get_scalar("website")
    }

    pub fn extensions(&self) -> Vec<&str> {
        split_list(self.get_scalar("extensions"), " ")
    }

    pub fn origin_communities(&self) -> Vec<&str> {
        split_list(self.get_scalar("originCommunity"), " && ")
    }

    pub fn other_references(&self) -> Vec<&str> {
        self.get_all_values("reference")
    }

    pub fn sponsors(&self) -> Vec<&str> {
        self.get_all_values("sponsor")
    }

    pub fn fun_facts(&self) -> Vec<&Node> {
        self.tree.find_nodes("funFact").collect()
    }

    /// Every code sample on the record, curated examples first.
    pub fn examples(&self) -> Vec<Example> {
        let mut examples: Vec<Example> = self
            .tree
            .find_nodes("example")
            .map(|node| Example {
                source: "the web".to_string(),
                link: None,
                code: node.children_to_string(),
            })
            .collect();

        let sourced: [(&str, &str, Option<String>); 5] = [
            (
                "compilerExplorer example",
                "Compiler Explorer",
                Some("https://godbolt.org/".to_string()),
            ),
            (
                "rijuRepl example",
                "Riju",
                self.get_scalar("rijuRepl").map(str::to_string),
            ),
            (
                "leachim6 example",
                "hello-world",
                self.get_scalar("leachim6 filepath").map(|path| {
                    format!("https://github.com/leachim6/hello-world/blob/main/{}", path)
                }),
            ),
            (
                "helloWorldCollection",
                "the Hello World Collection",
                self.get_scalar("helloWorldCollection")
                    .map(|name| format!("http://helloworldcollection.de/#{}", name)),
            ),
            (
                "wikipedia example",
                "Wikipedia",
                self.get_scalar("wikipedia").map(str::to_string),
            ),
        ];

        for (path, source, link) in sourced {
            if let Some(node) = self.get_group(path) {
                examples.push(Example {
                    source: source.to_string(),
                    link,
                    code: node.children_to_string(),
                });
            }
        }

        examples.retain(|example| !example.code.trim().is_empty());
        examples
    }
}

impl AttributeStore for LanguageRecord {
    fn get_group(&self, path: &str) -> Option<&Node> {
        self.tree.get_group(path)
    }

    fn get_all_groups(&self, path: &str) -> Vec<&Node> {
        self.tree.get_all_groups(path)
    }
}

fn split_list<'a>(value: Option<&'a str>, separator: &str) -> Vec<&'a str> {
    value
        .map(|v| {
            v.split(separator)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_lookup() {
        let record = LanguageRecord::parse("rust", "title Rust\ntype pl");
        assert_eq!(record.type_name(), Some("programming language"));
        assert!(record.is_language());

        let record = LanguageRecord::parse("x", "type gizmo");
        assert_eq!(record.type_name(), Some("gizmo"));
        assert!(!record.is_language());
    }

    #[test]
    fn test_title_falls_back_to_id() {
        let record = LanguageRecord::parse("rust", "");
        assert_eq!(record.title(), "rust");
        assert_eq!(record.permalink(), "rust.html");
    }

    #[test]
    fn test_lists() {
        let record = LanguageRecord::parse(
            "c",
            "creators Dennis Ritchie and Ken Thompson\nextensions c h\noriginCommunity Bell Labs && AT&T",
        );
        assert_eq!(record.creators(), vec!["Dennis Ritchie", "Ken Thompson"]);
        assert_eq!(record.extensions(), vec!["c", "h"]);
        assert_eq!(record.origin_communities(), vec!["Bell Labs", "AT&T"]);
    }

    #[test]
    fn test_examples_in_order() {
        let record = LanguageRecord::parse(
            "rust",
            "rijuRepl https://riju.codes/rust\n example\n  fn main() {}\nexample\n println!(\"a\");\nleachim6\n filepath r/Rust.rs\n example\n  fn main() { }",
        );
        let examples = record.examples();
        assert_eq!(examples.len(), 3);
        assert_eq!(examples[0].source, "the web");
        assert_eq!(examples[1].source, "Riju");
        assert_eq!(examples[1].link.as_deref(), Some("https://riju.codes/rust"));
        assert_eq!(
            examples[2].link.as_deref(),
            Some("https://github.com/leachim6/hello-world/blob/main/r/Rust.rs")
        );
    }

    #[test]
    fn test_meta_estimates() {
        let record = LanguageRecord::parse(
            "rust",
            "isbndb 2\n title|isbn13\n A|1\n B|2\ndblp https://dblp.org/rust\n hits 7\ngithubLanguage Rust\n repos 1,200",
        );
        assert_eq!(record.meta().book_count, 2);
        assert_eq!(record.meta().paper_count, 7);
        assert_eq!(record.meta().repo_count, Some(1200.0));
        assert_eq!(record.meta().users, None);
    }

    #[test]
    fn test_user_estimate() {
        let record = LanguageRecord::parse(
            "rust",
            "subreddit https://reddit.com/r/rust\n memberCount\n  2021 100000\n  2023 250000\ngithubRepo https://github.com/rust-lang/rust\n stars 90,000\nstackOverflowSurvey\n 2020\n  users 1\n 2021\n  users 5000",
        );
        assert_eq!(record.meta().users, Some(250_000.0 + 90_000.0 + 100_000.0));
    }
}
