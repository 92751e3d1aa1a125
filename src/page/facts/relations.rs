//! Facts linking the language to other records and outside references.
//!
//! Cross-reference ids (superset, compiles-to, written-in, see-also) must
//! resolve; an unknown id fails the page instead of silently losing a link.

use smallvec::SmallVec;

use crate::error::Result;
use crate::page::facts::{none, one, resolve_link};
use crate::page::record::LanguageRecord;
use crate::page::types::{Facts, RenderContext};
use crate::page::utils::{camel_case, link_many_aftertext, to_comma_list};
use crate::store::AttributeStore;

pub fn superset(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    let target = match record.get_scalar("supersetOf") {
        Some(id) => id,
        None => return none(),
    };
    let link = resolve_link(record, ctx, "supersetOf", target)?;
    one(format!("{} is a superset of {}", record.title(), link.anchor()))
}

pub fn origin_community(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let communities = record.origin_communities();
    if communities.is_empty() {
        return none();
    }
    let links = communities
        .iter()
        .map(|name| {
            format!(
                "<a href=\"../lists/originCommunities.html#{}\">{}</a>",
                camel_case(name),
                name
            )
        })
        .collect::<Vec<_>>()
        .join(" and ");
    one(format!("{} first developed in {}", record.title(), links))
}

pub fn file_extensions(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let extensions = record.extensions();
    if extensions.is_empty() {
        return none();
    }
    one(format!(
        "file extensions for {} include {}",
        record.title(),
        to_comma_list(&extensions, "and")
    ))
}

/// Resolve every space-separated id in `field` and join the anchors.
fn linked_ids(
    record: &LanguageRecord,
    ctx: &RenderContext<'_>,
    field: &'static str,
    separator: &str,
) -> Result<Option<String>> {
    let ids = match record.get_scalar(field) {
        Some(ids) => ids,
        None => return Ok(None),
    };
    let anchors = ids
        .split(' ')
        .filter(|id| !id.is_empty())
        .map(|id| resolve_link(record, ctx, field, id).map(|link| link.anchor()))
        .collect::<Result<Vec<_>>>()?;
    if anchors.is_empty() {
        return Ok(None);
    }
    Ok(Some(anchors.join(separator)))
}

pub fn compiles_to(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    match linked_ids(record, ctx, "compilesTo", " or ")? {
        Some(targets) => one(format!("{} compiles to {}", record.title(), targets)),
        None => none(),
    }
}

pub fn written_in(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    match linked_ids(record, ctx, "writtenIn", " & ")? {
        Some(languages) => one(format!("{} is written in {}", record.title(), languages)),
        None => none(),
    }
}

pub fn native_language(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("nativeLanguage") {
        Some(language) => one(format!(
            "{} is written with the native language of {}",
            record.title(),
            language
        )),
        None => none(),
    }
}

/// Related ids from Wikipedia first, then the curated list.
pub fn see_also(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    let mut ids: Vec<(&'static str, &str)> = Vec::new();
    for field in ["wikipedia related", "related"] {
        if let Some(value) = record.get_scalar(field) {
            ids.extend(value.split(' ').filter(|id| !id.is_empty()).map(|id| (field, id)));
        }
    }
    if ids.is_empty() {
        return none();
    }
    let anchors = ids
        .iter()
        .map(|&(field, id)| resolve_link(record, ctx, field, id).map(|link| link.anchor()))
        .collect::<Result<Vec<_>>>()?;
    one(format!(
        "See also: ({} related languages) {}",
        anchors.len(),
        anchors.join(", ")
    ))
}

/// Outside references, Semantic Scholar papers split from everything else.
pub fn references(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (papers, other): (Vec<&str>, Vec<&str>) = record
        .other_references()
        .into_iter()
        .partition(|link| link.contains("semanticscholar"));

    let title = record.title();
    let mut facts = SmallVec::new();
    if !papers.is_empty() {
        facts.push(format!(
            "Read more about {} on Semantic Scholar: {}",
            title,
            link_many_aftertext(&papers)
        ));
    }
    if !other.is_empty() {
        facts.push(format!(
            "Read more about {} on the web: {}",
            title,
            link_many_aftertext(&other)
        ));
    }
    Ok(facts)
}

/// Page-source attribution and the edit link. Always present.
pub fn trailers(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    let site = ctx.site;
    Ok(SmallVec::from_vec(vec![
        format!(
            "HTML of this page generated by <a href=\"{}\">{}</a>",
            site.generator_source_url, site.generator_name
        ),
        format!(
            "<a href=\"{}/{}\">Improve our {} file</a>",
            site.edit_url_base,
            record.id(),
            record.title()
        ),
    ]))
}
