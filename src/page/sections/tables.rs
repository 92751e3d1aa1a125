//! Sections wrapping an external sub-table: trending repos, books,
//! publications and discussions.
//!
//! Data Sources:
//! - `githubLanguage trendingProjects` (space-separated)
//! - `goodreads`, `isbndb`, `semanticScholar` (pipe-separated)
//! - `dblp publications` (pipe-separated), `dblp hits`
//! - `hackerNewsDiscussions` (pipe-separated)

use tracing::warn;

use crate::page::markup::{block, Directive};
use crate::page::record::LanguageRecord;
use crate::page::utils::parse_number;
use crate::store::AttributeStore;
use crate::table::{DelimitedTable, DerivedColumn, TableShape};

fn table_section(heading: String, directive: Directive, table: &DelimitedTable, columns: &[&str]) -> String {
    let delimiter = match directive {
        Directive::CommaTable => ',',
        _ => '|',
    };
    format!(
        "{}\n{}",
        heading,
        block(directive, None, &table.to_delimited(delimiter, columns))
    )
}

pub fn trending_repos(record: &LanguageRecord) -> String {
    let count = record
        .get_scalar("githubLanguage trendingProjectsCount")
        .and_then(parse_number)
        .unwrap_or(0.0);
    if count <= 0.0 {
        return String::new();
    }

    let group = record.get_group("githubLanguage trendingProjects");
    let mut table = match DelimitedTable::from_group(group, TableShape::Ssv) {
        Some(table) => table,
        None => {
            warn!(
                id = record.id(),
                count, "trending project count set but no trending table"
            );
            return String::new();
        }
    };
    table.derive(&[
        DerivedColumn::Alias {
            target: "repo",
            source: "name",
        },
        DerivedColumn::Alias {
            target: "repoLink",
            source: "url",
        },
    ]);

    let github_id = record.get_scalar("githubLanguage").unwrap_or("");
    table_section(
        format!(
            "## Trending <a href=\"https://github.com/trending/{}?since=monthly\">{} repos</a> on GitHub",
            github_id,
            record.title()
        ),
        Directive::CommaTable,
        &table,
        &["repo", "repoLink", "stars", "description"],
    )
}

pub fn goodreads(record: &LanguageRecord) -> String {
    let mut table = match DelimitedTable::from_group(record.get_group("goodreads"), TableShape::Pipe) {
        Some(table) => table,
        None => return String::new(),
    };
    table.derive(&[DerivedColumn::Search {
        target: "titleLink",
        prefix: "https://www.goodreads.com/search?q=",
        sources: &["title", "author"],
    }]);
    table_section(
        format!("## Books about {} on goodreads", record.title()),
        Directive::PipeTable,
        &table,
        &["title", "titleLink", "author", "year", "reviews", "ratings", "rating"],
    )
}

pub fn isbndb(record: &LanguageRecord) -> String {
    let mut table = match DelimitedTable::from_group(record.get_group("isbndb"), TableShape::Pipe) {
        Some(table) => table,
        None => return String::new(),
    };
    table.derive(&[DerivedColumn::Link {
        target: "titleLink",
        prefix: "https://isbndb.com/book/",
        source: "isbn13",
    }]);
    table_section(
        format!("## Books about {} from ISBNdb", record.title()),
        Directive::PipeTable,
        &table,
        &["title", "titleLink", "authors", "year", "publisher"],
    )
}

pub fn semantic_scholar(record: &LanguageRecord) -> String {
    let mut table =
        match DelimitedTable::from_group(record.get_group("semanticScholar"), TableShape::Pipe) {
            Some(table) => table,
            None => return String::new(),
        };
    table.derive(&[DerivedColumn::Link {
        target: "titleLink",
        prefix: "https://www.semanticscholar.org/paper/",
        source: "paperId",
    }]);
    table_section(
        format!("## Publications about {} from Semantic Scholar", record.title()),
        Directive::PipeTable,
        &table,
        &[
            "title",
            "titleLink",
            "authors",
            "year",
            "citations",
            "influentialCitations",
        ],
    )
}

/// DBLP publications. A hit count of `0` hides the section.
pub fn publications(record: &LanguageRecord) -> String {
    let hits = record.get_scalar("dblp hits");
    if hits == Some("0") {
        return String::new();
    }
    let mut table =
        match DelimitedTable::from_group(record.get_group("dblp publications"), TableShape::Pipe) {
            Some(table) => table,
            None => return String::new(),
        };
    table.derive(&[DerivedColumn::DoiOrUrl { target: "titleLink" }]);

    let hits = hits.map_or_else(|| table.len().to_string(), str::to_string);
    table_section(
        format!(
            "## {} publications about {} on <a href=\"{}\">DBLP</a>",
            hits,
            record.title(),
            record.get_scalar("dblp").unwrap_or("")
        ),
        Directive::PipeTable,
        &table,
        &["title", "titleLink", "year"],
    )
}

pub fn hacker_news(record: &LanguageRecord) -> String {
    let mut table = match DelimitedTable::from_group(
        record.get_group("hackerNewsDiscussions"),
        TableShape::Pipe,
    ) {
        Some(table) => table,
        None => return String::new(),
    };
    table.derive(&[
        DerivedColumn::Link {
            target: "titleLink",
            prefix: "https://news.ycombinator.com/item?id=",
            source: "id",
        },
        DerivedColumn::Date {
            target: "date",
            source: "time",
        },
    ]);
    table_section(
        format!("## HackerNews discussions of {}\n", record.title()),
        Directive::PipeTable,
        &table,
        &["title", "titleLink", "date", "score", "comments"],
    )
}
