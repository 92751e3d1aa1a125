//! Code-bearing sections: the embedded editor, example listings, fun facts
//! and the keyword list.

use tracing::warn;

use crate::page::markup::{block, Directive};
use crate::page::record::LanguageRecord;
use crate::page::utils::escape_html;
use crate::store::AttributeStore;

/// Editor seeded with the first example. The editor widget cannot hold a
/// backtick; that only warns, the section is still emitted.
pub fn monaco_editor(record: &LanguageRecord) -> String {
    let language = match record.get_scalar("monaco") {
        Some(language) => language,
        None => return String::new(),
    };

    let example = record
        .examples()
        .into_iter()
        .next()
        .map(|example| example.code)
        .unwrap_or_default();

    if example.contains('`') {
        warn!(
            id = record.id(),
            "backtick detected in a monaco example, not supported yet"
        );
    }

    block(Directive::MonacoEditor, Some(language), &example)
}

fn code_callout(header: &str, code: &str) -> String {
    format!(
        "exampleCodeHeader {}:\n{}",
        header,
        block(Directive::Code, None, &escape_html(code))
    )
}

pub fn examples(record: &LanguageRecord) -> String {
    record
        .examples()
        .iter()
        .map(|example| {
            let source = match &example.link {
                Some(link) => format!("<a href='{}'>{}</a>", link, example.source),
                None => example.source.clone(),
            };
            code_callout(&format!("Example from {}", source), &example.code)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn fun_facts(record: &LanguageRecord) -> String {
    record
        .fun_facts()
        .iter()
        .map(|fact| {
            let header = format!("<a href='{}'>Fun fact</a>", fact.content().unwrap_or(""));
            code_callout(&header, &fact.children_to_string())
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn keywords(record: &LanguageRecord) -> String {
    match record.get_scalar("keywords") {
        Some(keywords) => format!(
            "## <a href=\"../lists/keywords.html?filter={}\">Keywords</a> in {}\n* {}",
            record.id(),
            record.title(),
            keywords
        ),
        None => String::new(),
    }
}
