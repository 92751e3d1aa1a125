//! Fact resolvers.
//!
//! Each resolver inspects one attribute group and contributes zero or more
//! sentences to the facts list. `RESOLVERS` fixes the order the facts
//! appear in on the page; it is hand-ordered and must not be sorted.
//!
//! Resolvers treat missing attributes as "no fact". The only error they
//! return is an unresolvable cross-reference id.

pub mod community;
pub mod identity;
pub mod relations;
pub mod tooling;

use smallvec::smallvec;

use crate::error::{RenderError, Result};
use crate::page::record::{LanguageRecord, RecordLink};
use crate::page::types::{Facts, RenderContext};

pub type ResolveFn = fn(&LanguageRecord, &RenderContext<'_>) -> Result<Facts>;

/// A named entry in the resolver table.
pub struct FactResolver {
    pub name: &'static str,
    pub resolve: ResolveFn,
}

const fn resolver(name: &'static str, resolve: ResolveFn) -> FactResolver {
    FactResolver { name, resolve }
}

/// Page order of the facts list.
pub const RESOLVERS: &[FactResolver] = &[
    resolver("website", identity::website),
    resolver("downloads", identity::downloads),
    resolver("wikipedia", identity::wikipedia),
    resolver("githubRepo", identity::github_repo),
    resolver("gitlabRepo", identity::gitlab_repo),
    resolver("documentation", identity::documentation),
    resolver("spec", identity::spec),
    resolver("emailList", identity::mailing_list),
    resolver("demoVideo", identity::demo_video),
    resolver("githubLanguage", community::github_language_repos),
    resolver("supersetOf", relations::superset),
    resolver("originCommunity", relations::origin_community),
    resolver("jobs", community::job_estimate),
    resolver("extensions", relations::file_extensions),
    resolver("compilesTo", relations::compiles_to),
    resolver("writtenIn", relations::written_in),
    resolver("twitter", identity::twitter),
    resolver("conference", community::conferences),
    resolver("githubBigQuery", community::github_big_query),
    resolver("meetup", community::meetup),
    resolver("firstAnnouncement", community::announcement),
    resolver("subreddit", community::subreddit),
    resolver("projectEuler", community::project_euler),
    resolver("stackOverflowSurvey", community::survey),
    resolver("rosettaCode", community::rosetta_code),
    resolver("nativeLanguage", relations::native_language),
    resolver("gdbSupport", tooling::gdb),
    resolver("hopl", identity::hopl),
    resolver("tiobe", community::tiobe),
    resolver("esolang", identity::esolang),
    resolver("ubuntuPackage", tooling::ubuntu_package),
    resolver("antlr", tooling::antlr),
    resolver("languageServerProtocolProject", tooling::lsp),
    resolver("codeMirror", tooling::code_mirror),
    resolver("monaco", tooling::monaco),
    resolver("pygmentsHighlighter", tooling::pygments),
    resolver("linguistGrammarRepo", tooling::linguist),
    resolver("quineRelay", community::quine_relay),
    resolver("jupyterKernel", tooling::jupyter_kernels),
    resolver("packageRepository", tooling::package_repositories),
    resolver("pages", identity::url_pages),
    resolver("cheatSheetUrl", identity::cheat_sheet),
    resolver("indeedJobs", community::indeed_jobs),
    resolver("domainName", identity::domain_registration),
    resolver("related", relations::see_also),
    resolver("reference", relations::references),
    resolver("trailer", relations::trailers),
];

/// Run every resolver in table order and flatten the results.
pub fn resolve_facts(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut facts = Vec::new();
    for entry in RESOLVERS {
        facts.extend((entry.resolve)(record, ctx)?);
    }
    Ok(facts)
}

/// Render the facts list, one `- ` bullet per fact.
pub fn facts_section(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<String> {
    Ok(resolve_facts(record, ctx)?
        .iter()
        .map(|fact| format!("- {}", fact))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn none() -> Result<Facts> {
    Ok(Facts::new())
}

fn one(fact: String) -> Result<Facts> {
    Ok(smallvec![fact])
}

/// Fact text followed by a `\n <url>` continuation link.
fn linked(text: String, url: &str) -> String {
    format!("{}\n {}", text, url)
}

/// Resolve a referenced record id or fail the page.
fn resolve_link(
    record: &LanguageRecord,
    ctx: &RenderContext<'_>,
    field: &'static str,
    target: &str,
) -> Result<RecordLink> {
    ctx.index
        .lookup(target)
        .ok_or_else(|| RenderError::UnresolvedReference {
            id: record.id().to_string(),
            field,
            target: target.to_string(),
        })
}
