//! Facts about where the language lives: websites, repositories, docs and
//! other official pages.

use smallvec::SmallVec;

use crate::error::Result;
use crate::page::facts::{linked, none, one};
use crate::page::record::LanguageRecord;
use crate::page::types::{Facts, RenderContext};
use crate::page::utils::{format_count, pretty_url_link};
use crate::store::AttributeStore;

pub fn website(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.website() {
        Some(url) => one(linked(format!("{} website", record.title()), url)),
        None => none(),
    }
}

pub fn downloads(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("downloadPageUrl") {
        Some(url) => one(linked(format!("{} downloads page", record.title()), url)),
        None => none(),
    }
}

pub fn wikipedia(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("wikipedia") {
        Some(url) => one(linked(format!("{} Wikipedia page", record.title()), url)),
        None => none(),
    }
}

pub fn github_repo(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let url = match record.get_scalar("githubRepo") {
        Some(url) => url,
        None => return none(),
    };
    let stars = record
        .get_scalar("githubRepo stars")
        .map(|stars| format!(" and has {} stars", format_count(stars)))
        .unwrap_or_default();
    one(format!(
        "{} is developed on <a href=\"{}\">GitHub</a>{}",
        record.title(),
        url,
        stars
    ))
}

pub fn gitlab_repo(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("gitlabRepo") {
        Some(url) => one(linked(format!("{} on GitLab", record.title()), url)),
        None => none(),
    }
}

/// One link reads inline; two or more become a counted list.
fn multi_link(
    record: &LanguageRecord,
    ctx: &RenderContext<'_>,
    key: &str,
    singular: &str,
    plural: &str,
) -> Result<Facts> {
    let links = record.get_all_values(key);
    let title = record.title();
    match links.as_slice() {
        [] => none(),
        [only] => one(linked(format!("{} {}", title, singular), only)),
        many => one(format!(
            "{} has {} {} for {}: {}",
            ctx.site.site_name,
            many.len(),
            plural,
            title,
            many.iter()
                .map(|url| pretty_url_link(url))
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

pub fn documentation(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    multi_link(record, ctx, "documentation", "docs", "documentation sites")
}

pub fn spec(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    multi_link(record, ctx, "spec", "specs", "specification sites")
}

pub fn mailing_list(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    multi_link(record, ctx, "emailList", "mailing list", "mailing list sites")
}

pub fn demo_video(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("demoVideo") {
        Some(url) => one(linked(format!("Video demo of {}", record.title()), url)),
        None => none(),
    }
}

pub fn twitter(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("twitter") {
        Some(url) => one(linked(format!("{} on Twitter", record.title()), url)),
        None => none(),
    }
}

pub fn hopl(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("hopl") {
        Some(url) => one(linked(format!("{} on HOPL", record.title()), url)),
        None => none(),
    }
}

pub fn esolang(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("esolang") {
        Some(url) => one(linked(format!("{} on Esolang", record.title()), url)),
        None => none(),
    }
}

/// Official pages, each independently optional. Only the first URL of each
/// kind is shown.
pub fn url_pages(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    const PAGES: &[(&str, &str)] = &[
        ("annualReportsUrl", "Annual Reports for"),
        ("releaseNotesUrl", "Release Notes for"),
        ("officialBlogUrl", "Official Blog page for"),
        ("eventsPageUrl", "Events page for"),
        ("faqPageUrl", "Frequently Asked Questions for"),
    ];

    let title = record.title();
    let facts: SmallVec<_> = PAGES
        .iter()
        .filter_map(|(key, label)| {
            record
                .get_all_values(key)
                .first()
                .map(|url| linked(format!("{} {}", label, title), url))
        })
        .collect();
    Ok(facts)
}

pub fn cheat_sheet(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("cheatSheetUrl") {
        Some(url) => one(linked(format!("{} cheat sheet", record.title()), url)),
        None => none(),
    }
}

pub fn domain_registration(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (domain, registered) = match (
        record.get_scalar("domainName"),
        record.get_scalar("domainName registered"),
    ) {
        (Some(domain), Some(registered)) => (domain, registered),
        _ => return none(),
    };
    let href = record
        .website()
        .map(str::to_string)
        .unwrap_or_else(|| format!("https://{}", domain));
    one(format!(
        "<a href=\"{}\">{}</a> was registered in {}",
        href, domain, registered
    ))
}
