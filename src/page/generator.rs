//! Language Page Generator
//!
//! Main entry point for rendering one language page. Runs every section
//! builder in template order and joins them into a scroll document.
//!
//! Public API (consumed by `Corpus::render_all` and the `render_pages` binary):
//! - LanguagePageGenerator::new(ctx) -> Self
//! - LanguagePageGenerator::generate(record, neighbors) -> Result<String>

use tracing::debug;

use crate::error::{RenderError, Result};
use crate::page::facts::facts_section;
use crate::page::markup::{block, collapse_blank_lines, Directive};
use crate::page::record::{LanguageRecord, Neighbors};
use crate::page::sections::{code, features, header, tables};
use crate::page::types::RenderContext;
use crate::page::utils::upper_first;

/// Language page generator. Holds only the shared render context, so one
/// instance can render any number of pages, from any number of threads.
#[derive(Clone, Copy)]
pub struct LanguagePageGenerator<'a> {
    ctx: RenderContext<'a>,
}

impl<'a> LanguagePageGenerator<'a> {
    pub fn new(ctx: RenderContext<'a>) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &RenderContext<'a> {
        &self.ctx
    }

    /// Render a complete page.
    ///
    /// # Errors
    /// * `EncodedSpaceInTitle` - the display title contains a literal `%20`
    /// * `UnresolvedReference` - a cross-reference id names no known record
    pub fn generate(&self, record: &LanguageRecord, neighbors: &Neighbors) -> Result<String> {
        let ctx = &self.ctx;
        let title = record.title();
        if title.contains("%20") {
            return Err(RenderError::EncodedSpaceInTitle(title.to_string()));
        }

        let mut sections = Vec::with_capacity(32);

        // Metadata and navigation
        sections.push("import header.scroll".to_string());
        sections.push(format!("title {}", title));
        sections.push(match record.type_name() {
            Some(name) => format!("title {} - {}\n hidden", title, upper_first(name)),
            None => format!("title {}\n hidden", title),
        });
        sections.push(block(
            Directive::Html,
            None,
            &format!(
                "<a class=\"prevLang\" href=\"{}\">&lt;</a>\n<a class=\"nextLang\" href=\"{}\">&gt;</a>",
                neighbors.previous, neighbors.next
            ),
        ));
        sections.push(format!(
            "viewSourceUrl {}/{}.pldb",
            ctx.site.view_source_base,
            record.id()
        ));

        // Main column
        sections.push("startColumns 4".to_string());
        sections.push(block(
            Directive::Html,
            None,
            &format!(
                "<div class=\"quickLinks\">{}</div>",
                header::quick_links(record, ctx.icons)
            ),
        ));
        sections.push(header::one_liner(record));
        sections.push(header::kpi_bar(record, ctx));
        sections.push(header::try_now_repls(record));
        sections.push(code::monaco_editor(record));
        sections.push(header::image(record, ctx.site));
        sections.push(header::description(record));
        sections.push(facts_section(record, ctx)?);
        sections.push(block(Directive::Html, None, "<br>"));
        sections.push(code::examples(record));
        sections.push(code::fun_facts(record));
        sections.push(code::keywords(record));
        sections.push("endColumns".to_string());

        // Full-width tables
        sections.push(features::features(record, ctx.features));
        sections.push(tables::trending_repos(record));
        sections.push(tables::goodreads(record));
        sections.push(tables::isbndb(record));
        sections.push(tables::semantic_scholar(record));
        sections.push(tables::publications(record));
        sections.push(tables::hacker_news(record));

        // Footer
        sections.push(format!(
            "keyboardNav {} {}",
            neighbors.previous, neighbors.next
        ));
        sections.push("import ../footer.scroll".to_string());

        let mut page = sections.join("\n\n");
        page.push('\n');
        let page = collapse_blank_lines(&page);

        debug!(id = record.id(), bytes = page.len(), "rendered page");
        Ok(page)
    }
}
