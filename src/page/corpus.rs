//! A batch of records rendered together.
//!
//! The corpus owns rank assignment, the id index used for cross-references
//! and prev/next neighbors. Pages are rendered in parallel with rayon; each
//! page's outcome is reported separately so one bad record never sinks the
//! batch.

use std::time::Instant;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::page::catalog::{FeatureCatalog, IconSet};
use crate::page::generator::LanguagePageGenerator;
use crate::page::record::{LanguageRecord, Neighbors, RecordIndex, RecordLink};
use crate::page::types::RenderContext;

pub struct Corpus {
    records: Vec<LanguageRecord>,
    positions: FxHashMap<String, usize>,
}

impl Corpus {
    /// Take records in rank order. Rank is the position in `records`;
    /// language rank counts language records only.
    pub fn new(mut records: Vec<LanguageRecord>) -> Self {
        let total = records.len();
        let languages = records.iter().filter(|r| r.is_language()).count();

        let mut language_rank = 0;
        for (rank, record) in records.iter_mut().enumerate() {
            let is_language = record.is_language();
            let meta = record.meta_mut();
            meta.rank = rank;
            meta.language_rank = language_rank;
            if is_language {
                meta.rank_note = Some(format!(
                    "#{} of {} languages; #{} of {} files overall",
                    language_rank + 1,
                    languages,
                    rank + 1,
                    total
                ));
                language_rank += 1;
            }
        }

        let positions = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id().to_string(), i))
            .collect();

        Self { records, positions }
    }

    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LanguageRecord> {
        self.positions.get(id).map(|&i| &self.records[i])
    }

    /// Records ranked just before and after `id`, wrapping at both ends.
    pub fn neighbors(&self, id: &str) -> Option<Neighbors> {
        self.positions.get(id).map(|&i| self.neighbors_at(i))
    }

    fn neighbors_at(&self, i: usize) -> Neighbors {
        let n = self.records.len();
        Neighbors {
            previous: self.records[(i + n - 1) % n].permalink(),
            next: self.records[(i + 1) % n].permalink(),
        }
    }

    /// Render every page. Results come back in rank order, keyed by id.
    pub fn render_all(
        &self,
        features: &FeatureCatalog,
        icons: &IconSet,
        site: &SiteConfig,
        current_year: i32,
    ) -> Vec<(String, Result<String>)> {
        let start = Instant::now();
        let ctx = RenderContext::new(features, self, icons, site).with_year(current_year);
        let generator = LanguagePageGenerator::new(ctx);

        let pages: Vec<(String, Result<String>)> = self
            .records
            .par_iter()
            .enumerate()
            .map(|(i, record)| {
                let neighbors = self.neighbors_at(i);
                let page_start = Instant::now();
                let page = generator.generate(record, &neighbors);
                debug!(id = record.id(), elapsed = ?page_start.elapsed(), "page done");
                (record.id().to_string(), page)
            })
            .collect();

        let failed = pages.iter().filter(|(_, page)| page.is_err()).count();
        info!(
            "Rendered {} pages ({} failed) in {:?}",
            pages.len(),
            failed,
            start.elapsed()
        );
        pages
    }
}

impl RecordIndex for Corpus {
    fn lookup(&self, id: &str) -> Option<RecordLink> {
        self.get(id).map(LanguageRecord::link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::new(vec![
            LanguageRecord::parse("c", "title C\ntype pl"),
            LanguageRecord::parse("unix", "title Unix\ntype os"),
            LanguageRecord::parse("rust", "title Rust\ntype pl\nwrittenIn c"),
        ])
    }

    #[test]
    fn test_ranks() {
        let corpus = corpus();
        let rust = corpus.get("rust").unwrap();
        assert_eq!(rust.meta().rank, 2);
        assert_eq!(rust.meta().language_rank, 1);
    }

    #[test]
    fn test_rank_note_only_for_languages() {
        let corpus = corpus();
        assert_eq!(
            corpus.get("rust").unwrap().meta().rank_note.as_deref(),
            Some("#2 of 2 languages; #3 of 3 files overall")
        );
        assert_eq!(corpus.get("unix").unwrap().meta().rank_note, None);
    }

    #[test]
    fn test_render_all_shows_user_estimate() {
        let corpus = Corpus::new(vec![LanguageRecord::parse(
            "rust",
            "title Rust\ntype pl\nsubreddit https://reddit.com/r/rust\n memberCount\n  2023 250000",
        )]);
        let pages = corpus.render_all(&FeatureCatalog::default(), &IconSet::new(), &SiteConfig::default(), 2024);
        let page = pages[0].1.as_ref().unwrap();
        assert!(page.contains(
            " 250.0k <span title=\"Crude user estimate from a linear model.\">Users</span>"
        ));
        assert!(page.contains(" #1 <span title=\"#1 of 1 languages; #1 of 1 files overall\">on PLDB</span>"));
    }

    #[test]
    fn test_neighbors_wrap() {
        let corpus = corpus();
        let first = corpus.neighbors("c").unwrap();
        assert_eq!(first.previous, "rust.html");
        assert_eq!(first.next, "unix.html");
        let last = corpus.neighbors("rust").unwrap();
        assert_eq!(last.next, "c.html");
        assert!(corpus.neighbors("go").is_none());
    }

    #[test]
    fn test_lookup() {
        let corpus = corpus();
        assert_eq!(
            corpus.lookup("c"),
            Some(RecordLink {
                permalink: "c.html".to_string(),
                title: "C".to_string()
            })
        );
        assert_eq!(corpus.lookup("go"), None);
    }

    #[test]
    fn test_render_all_resolves_cross_references() {
        let corpus = corpus();
        let pages = corpus.render_all(&FeatureCatalog::default(), &IconSet::new(), &SiteConfig::default(), 2024);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].0, "rust");
        let rust = pages[2].1.as_ref().unwrap();
        assert!(rust.contains("Rust is written in <a href=\"c.html\">C</a>"));
        assert!(rust.contains("keyboardNav unix.html c.html"));
    }
}
