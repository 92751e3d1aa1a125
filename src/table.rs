//! Tabular normalizer.
//!
//! Sub-tables show up in three encodings: space-separated rows, pipe-separated
//! rows and a tree of rows. All three parse into the same `DelimitedTable`:
//! an ordered list of rows, each a column -> value map. Derived columns are
//! added in memory before the table is serialized with a declared column
//! subset in declared order.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rustc_hash::FxHashMap;

use crate::store::Node;

/// Input encoding of a sub-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// Header line plus rows, separated by single spaces.
    Ssv,
    /// Header line plus rows, separated by `|`.
    Pipe,
    /// One child node per row; each grandchild is `Column value`, or a bare
    /// `Column` key followed by an indented multi-line value.
    Tree,
}

impl TableShape {
    pub fn delimiter(&self) -> Option<char> {
        match self {
            TableShape::Ssv => Some(' '),
            TableShape::Pipe => Some('|'),
            TableShape::Tree => None,
        }
    }
}

/// One table row. Column order within a row carries no meaning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: FxHashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Value of `column`, treating empty cells as absent.
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }
}

/// Computed column rules. Each is pure and leaves the target empty when its
/// source is missing.
#[derive(Debug, Clone, Copy)]
pub enum DerivedColumn {
    /// Copy `source` under a display name.
    Alias {
        target: &'static str,
        source: &'static str,
    },
    /// `prefix` followed by the raw `source` value.
    Link {
        target: &'static str,
        prefix: &'static str,
        source: &'static str,
    },
    /// `https://doi.org/<doi>` when a DOI is present, else the row's `url`.
    DoiOrUrl { target: &'static str },
    /// `prefix` followed by the URL-encoded, space-joined `sources`.
    Search {
        target: &'static str,
        prefix: &'static str,
        sources: &'static [&'static str],
    },
    /// `source` timestamp reformatted as `MM/DD/YYYY`.
    Date {
        target: &'static str,
        source: &'static str,
    },
}

impl DerivedColumn {
    fn target(&self) -> &'static str {
        match self {
            DerivedColumn::Alias { target, .. }
            | DerivedColumn::Link { target, .. }
            | DerivedColumn::DoiOrUrl { target }
            | DerivedColumn::Search { target, .. }
            | DerivedColumn::Date { target, .. } => target,
        }
    }

    fn compute(&self, row: &Row) -> String {
        match self {
            DerivedColumn::Alias { source, .. } => row.get(source).unwrap_or("").to_string(),
            DerivedColumn::Link { prefix, source, .. } => row
                .non_empty(source)
                .map(|value| format!("{}{}", prefix, value))
                .unwrap_or_default(),
            DerivedColumn::DoiOrUrl { .. } => match row.non_empty("doi") {
                Some(doi) => format!("https://doi.org/{}", doi),
                None => row.get("url").unwrap_or("").to_string(),
            },
            DerivedColumn::Search {
                prefix, sources, ..
            } => {
                let terms: Vec<&str> = sources.iter().filter_map(|s| row.non_empty(s)).collect();
                if terms.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", prefix, urlencoding::encode(&terms.join(" ")))
                }
            }
            DerivedColumn::Date { source, .. } => row
                .non_empty(source)
                .and_then(format_timestamp)
                .unwrap_or_default(),
        }
    }
}

/// Parse a raw timestamp and render it as `MM/DD/YYYY`.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` and unix time in
/// seconds or milliseconds.
pub fn format_timestamp(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        dt.date_naive()
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        dt.date()
    } else if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        d
    } else {
        let n = raw.parse::<i64>().ok()?;
        let secs = if n.abs() >= 100_000_000_000 { n / 1000 } else { n };
        DateTime::from_timestamp(secs, 0)?.date_naive()
    };
    Some(date.format("%m/%d/%Y").to_string())
}

/// Ordered rows parsed from one sub-table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelimitedTable {
    rows: Vec<Row>,
}

/// Parse raw sub-table text in the given shape.
pub fn parse_table(raw: &str, shape: TableShape) -> DelimitedTable {
    match shape.delimiter() {
        Some(delimiter) => parse_delimited(raw, delimiter),
        None => parse_tree(&Node::parse(raw)),
    }
}

impl DelimitedTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Table stored under a record group.
    ///
    /// A missing group, a group whose content is the sentinel `0`, and a
    /// group with no rows all count as absent.
    pub fn from_group(group: Option<&Node>, shape: TableShape) -> Option<Self> {
        let group = group?;
        if group.content() == Some("0") {
            return None;
        }
        let table = parse_table(&group.children_to_string(), shape);
        if table.is_empty() {
            None
        } else {
            Some(table)
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Fill in derived columns on every row.
    pub fn derive(&mut self, rules: &[DerivedColumn]) {
        for row in &mut self.rows {
            for rule in rules {
                let value = rule.compute(row);
                row.set(rule.target(), value);
            }
        }
    }

    /// Stable sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        self.rows.sort_by(compare);
    }

    pub fn reverse(&mut self) {
        self.rows.reverse();
    }

    /// Header line plus one line per row, emitting only `columns`.
    pub fn to_delimited(&self, delimiter: char, columns: &[&str]) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(
            columns
                .iter()
                .map(|c| escape_cell(c, delimiter))
                .collect::<Vec<_>>()
                .join(&delimiter.to_string()),
        );
        for row in &self.rows {
            lines.push(
                columns
                    .iter()
                    .map(|c| escape_cell(row.get(c).unwrap_or(""), delimiter))
                    .collect::<Vec<_>>()
                    .join(&delimiter.to_string()),
            );
        }
        lines.join("\n")
    }

    /// One `row` node per row. Columns in `block_columns` always render as a
    /// bare key followed by the value as an indented block.
    pub fn to_tree(&self, columns: &[&str], block_columns: &[&str]) -> String {
        let mut root = Node::default();
        for row in &self.rows {
            let row_node = root.push_child(Node::new("row"));
            for column in columns {
                let value = row.get(column).unwrap_or("");
                if block_columns.contains(column) || value.contains('\n') {
                    let cell = row_node.push_child(Node::new(*column));
                    if !value.is_empty() {
                        cell.set_children(value.split('\n').map(Node::new).collect());
                    }
                } else if value.is_empty() {
                    row_node.push_child(Node::new(*column));
                } else {
                    row_node.push_child(Node::new(format!("{} {}", column, value)));
                }
            }
        }
        root.children_to_string()
    }
}

fn parse_delimited(raw: &str, delimiter: char) -> DelimitedTable {
    let mut lines = raw
        .split('\n')
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty());
    let header = match lines.next() {
        Some(line) => split_record(line, delimiter),
        None => return DelimitedTable::default(),
    };
    let rows = lines
        .map(|line| {
            let mut row = Row::new();
            for (column, value) in header.iter().zip(split_record(line, delimiter)) {
                row.set(column.clone(), value);
            }
            row
        })
        .collect();
    DelimitedTable { rows }
}

fn parse_tree(root: &Node) -> DelimitedTable {
    let rows = root
        .children()
        .iter()
        .map(|row_node| {
            let mut row = Row::new();
            for cell in row_node.children() {
                let value = if cell.children().is_empty() {
                    cell.content().unwrap_or("").to_string()
                } else {
                    cell.children_to_string()
                };
                row.set(cell.key(), value);
            }
            row
        })
        .collect();
    DelimitedTable { rows }
}

/// Split one record, honouring `"` quoting with `""` as an escaped quote.
fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && current.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            cells.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    cells.push(current);
    cells
}

fn escape_cell(value: &str, delimiter: char) -> String {
    if value.contains(delimiter) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pipe() {
        let table = parse_table("title|year\nThe Book|2019\nA|B|2020", TableShape::Pipe);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].get("title"), Some("The Book"));
        assert_eq!(table.rows()[1].get("year"), Some("B"));
    }

    #[test]
    fn test_parse_ssv_with_quotes() {
        let raw = "name url stars description\nserde https://github.com/serde-rs/serde 8000 \"Serialization framework\"";
        let table = parse_table(raw, TableShape::Ssv);
        assert_eq!(table.rows()[0].get("stars"), Some("8000"));
        assert_eq!(
            table.rows()[0].get("description"),
            Some("Serialization framework")
        );
    }

    #[test]
    fn test_parse_tree_rows() {
        let raw = "row\n Feature Comments\n Example\n  // hi\n  // there\nrow\n Feature Macros";
        let table = parse_table(raw, TableShape::Tree);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].get("Example"), Some("// hi\n// there"));
        assert_eq!(table.rows()[1].get("Example"), None);
    }

    #[test]
    fn test_sentinel_zero_is_absent() {
        let record = Node::parse("isbndb 0\n title|isbn13\n X|123");
        assert!(DelimitedTable::from_group(record.child("isbndb"), TableShape::Pipe).is_none());
        assert!(DelimitedTable::from_group(None, TableShape::Pipe).is_none());
    }

    #[test]
    fn test_derived_columns_tolerate_missing_sources() {
        let mut table = DelimitedTable::new(vec![
            Row::new().with("paperId", "abc").with("time", "2020-03-05T10:00:00Z"),
            Row::new(),
        ]);
        table.derive(&[
            DerivedColumn::Link {
                target: "titleLink",
                prefix: "https://www.semanticscholar.org/paper/",
                source: "paperId",
            },
            DerivedColumn::Date {
                target: "date",
                source: "time",
            },
        ]);
        assert_eq!(
            table.rows()[0].get("titleLink"),
            Some("https://www.semanticscholar.org/paper/abc")
        );
        assert_eq!(table.rows()[0].get("date"), Some("03/05/2020"));
        assert_eq!(table.rows()[1].get("titleLink"), Some(""));
        assert_eq!(table.rows()[1].get("date"), Some(""));
    }

    #[test]
    fn test_doi_or_url() {
        let mut table = DelimitedTable::new(vec![
            Row::new().with("doi", "10.1/x").with("url", "https://a"),
            Row::new().with("url", "https://b"),
        ]);
        table.derive(&[DerivedColumn::DoiOrUrl { target: "titleLink" }]);
        assert_eq!(table.rows()[0].get("titleLink"), Some("https://doi.org/10.1/x"));
        assert_eq!(table.rows()[1].get("titleLink"), Some("https://b"));
    }

    #[test]
    fn test_to_delimited_escapes_and_selects_columns() {
        let table = DelimitedTable::new(vec![Row::new()
            .with("repo", "a,b")
            .with("stars", "10")
            .with("ignored", "x")]);
        assert_eq!(
            table.to_delimited(',', &["repo", "stars"]),
            "repo,stars\n\"a,b\",10"
        );
    }

    #[test]
    fn test_to_tree_blocks() {
        let table = DelimitedTable::new(vec![Row::new()
            .with("Feature", "Comments")
            .with("Example", "# one\n# two")
            .with("Token", "")]);
        assert_eq!(
            table.to_tree(&["Feature", "Example", "Token"], &["Example"]),
            "row\n Feature Comments\n Example\n  # one\n  # two\n Token"
        );
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(format_timestamp("2021-12-31").as_deref(), Some("12/31/2021"));
        assert_eq!(
            format_timestamp("2021-12-31 23:00:00").as_deref(),
            Some("12/31/2021")
        );
        assert_eq!(format_timestamp("0").as_deref(), Some("01/01/1970"));
        assert_eq!(format_timestamp("soon"), None);
    }
}
