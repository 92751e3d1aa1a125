//! Top-of-page sections: quick links, one-liner, KPI bar, try-now REPLs,
//! hero image and description.

use crate::config::SiteConfig;
use crate::page::catalog::IconSet;
use crate::page::markup::{block, Directive};
use crate::page::record::LanguageRecord;
use crate::page::types::RenderContext;
use crate::page::utils::{camel_case, format_abbreviated, indefinite_article};
use crate::store::AttributeStore;

/// User estimates at or below this are hidden.
const MIN_USERS: f64 = 10.0;

/// Sentences of the Wikipedia summary kept in the description.
const SUMMARY_SENTENCES: usize = 3;

/// Icon links to the language's main homes, in fixed order.
pub fn quick_links(record: &LanguageRecord, icons: &IconSet) -> String {
    let links = [
        ("home", record.website()),
        ("github", record.get_scalar("githubRepo")),
        ("wikipedia", record.get_scalar("wikipedia")),
        ("reddit", record.get_scalar("subreddit")),
        ("twitter", record.get_scalar("twitter")),
        ("email", record.get_scalar("emailList")),
    ];
    links
        .into_iter()
        .filter_map(|(key, url)| url.map(|url| format!("<a href=\"{}\">{}</a>", url, icons.get(key))))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `* Title, aka X, is a <type> created in YEAR by A and B.` plus after-text
/// links for the year and each creator.
pub fn one_liner(record: &LanguageRecord) -> String {
    let title = record.title();
    let aka = record
        .get_scalar("standsFor")
        .map(|s| format!(", aka {},", s))
        .unwrap_or_default();

    let kind = match (record.type_code(), record.type_name()) {
        (Some(code), Some(name)) => format!(
            " is {} <a href=\"../lists/languages.html?filter={}\">{}</a>",
            indefinite_article(name),
            code,
            name
        ),
        _ => String::new(),
    };

    let appeared = record.appeared();
    let created = appeared
        .map(|year| format!(" created in {}", year))
        .unwrap_or_default();

    let creators = record.creators();
    let by = if creators.is_empty() {
        String::new()
    } else {
        format!(" by {}", creators.join(" and "))
    };

    let mut lines = vec![format!("* {}{}{}{}{}.", title, aka, kind, created, by)];
    if let Some(year) = appeared {
        lines.push(format!(" link ../lists/languages.html?filter={} {}", year, year));
    }
    for name in &creators {
        lines.push(format!(
            " link ../lists/creators.html#{} {}",
            camel_case(name),
            name
        ));
    }
    lines.join("\n")
}

/// Rank, age, users, books, papers, sponsors and repos. Rank is always
/// shown; everything else only when known.
pub fn kpi_bar(record: &LanguageRecord, ctx: &RenderContext<'_>) -> String {
    let meta = record.meta();
    let title = record.title();
    let is_language = record.is_language();
    let site = &ctx.site.site_name;

    let mut lines = Vec::new();
    if is_language {
        match &meta.rank_note {
            Some(note) => lines.push(format!(
                "#{} <span title=\"{}\">on {}</span>",
                meta.language_rank + 1,
                note,
                site
            )),
            None => lines.push(format!("#{} on {}", meta.language_rank + 1, site)),
        }
    } else {
        lines.push(format!("#{} on {}", meta.rank + 1, site));
    }

    if let Some(appeared) = record.appeared() {
        lines.push(format!("{} Years Old", ctx.current_year - appeared));
    }

    if let Some(users) = meta.users.filter(|u| *u > MIN_USERS) {
        let users = if users < 1000.0 {
            format_abbreviated(users, 0)
        } else {
            format_abbreviated(users, 1)
        };
        lines.push(format!(
            "{} <span title=\"Crude user estimate from a linear model.\">Users</span>",
            users
        ));
    }

    if is_language {
        lines.push(format!(
            "{} <span title=\"Books about or leveraging {}\">Books</span>",
            meta.book_count, title
        ));
        lines.push(format!(
            "{} <span title=\"Academic publications about or leveraging {}\">Papers</span>",
            meta.paper_count, title
        ));
    }

    let sponsors = record.sponsors();
    if !sponsors.is_empty() {
        lines.push(format!(
            "{} <span title=\"Number of people who have sponsored research on this file for $10 per fact.\">Sponsors</span>",
            sponsors.len()
        ));
    }

    if let Some(repos) = meta.repo_count.filter(|r| *r > 0.0) {
        lines.push(format!(
            "{} <span title=\"{} repos on GitHub.\">Repos</span>",
            format_abbreviated(repos, 0),
            title
        ));
    }

    block(Directive::KpiTable, None, &lines.join("\n"))
}

/// Up to four online REPL providers, each optional.
pub fn try_now_repls(record: &LanguageRecord) -> String {
    let mut repls = Vec::new();
    if let Some(url) = record.get_scalar("webRepl") {
        repls.push(format!("<a href=\"{}\">Web</a>", url));
    }
    if let Some(url) = record.get_scalar("rijuRepl") {
        repls.push(format!("<a href=\"{}\">Riju</a>", url));
    }
    if let Some(id) = record.get_scalar("tryItOnline") {
        repls.push(format!("<a href=\"https://tio.run/#{}\">TIO</a>", id));
    }
    if let Some(id) = record.get_scalar("replit") {
        repls.push(format!("<a href=\"https://repl.it/languages/{}\">Replit</a>", id));
    }
    if repls.is_empty() {
        return String::new();
    }
    format!("* Try now: {}", repls.join(" · "))
}

/// Screenshot, else photo, else nothing.
pub fn image(record: &LanguageRecord, site: &SiteConfig) -> String {
    let title = record.title();
    let (url, caption) = if let Some(url) = record.get_scalar("screenshot") {
        (
            url,
            format!(
                "A screenshot of the visual language {}.\n  link ../lists/languages.html?filter=visual visual language",
                title
            ),
        )
    } else if let Some(url) = record.get_scalar("photo") {
        (url, format!("A photo of {}.", title))
    } else {
        return String::new();
    };

    let path = url.replacen(&site.image_host_prefix, "../", 1);
    format!("openGraphImage image\nimage {}\n caption {}", path, caption)
}

/// Wikipedia summary (first three sentences), else the curated
/// description, else the GitHub repo description.
pub fn description(record: &LanguageRecord) -> String {
    let text = if let Some(summary) = record.get_scalar("wikipedia summary") {
        let lead = summary
            .split(". ")
            .take(SUMMARY_SENTENCES)
            .collect::<Vec<_>>()
            .join(". ");
        let link = record.get_scalar("wikipedia").unwrap_or("");
        format!(
            "{}. Read more on Wikipedia...\n {} Read more on Wikipedia...",
            lead.trim_end_matches('.'),
            link
        )
    } else if let Some(text) = record.get_scalar("description") {
        text.to_string()
    } else if let Some(text) = record.get_scalar("githubRepo description") {
        text.to_string()
    } else {
        return String::new();
    };
    format!("* {}", text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::facts::test_support::Fixture;
    use crate::page::record::RecordMeta;

    #[test]
    fn test_quick_links_order_and_icons() {
        let mut icons = IconSet::new();
        icons.insert("github", "<svg id=\"gh\"/>");
        let record = LanguageRecord::parse(
            "rust",
            "twitter https://twitter.com/rustlang\ngithubRepo https://github.com/rust-lang/rust",
        );
        assert_eq!(
            quick_links(&record, &icons),
            "<a href=\"https://github.com/rust-lang/rust\"><svg id=\"gh\"/></a> <a href=\"https://twitter.com/rustlang\">twitter</a>"
        );
    }

    #[test]
    fn test_one_liner() {
        let record = LanguageRecord::parse(
            "c",
            "title C\ntype pl\nappeared 1972\ncreators Dennis Ritchie",
        );
        assert_eq!(
            one_liner(&record),
            "* C is a <a href=\"../lists/languages.html?filter=pl\">programming language</a> created in 1972 by Dennis Ritchie.\n link ../lists/languages.html?filter=1972 1972\n link ../lists/creators.html#dennisRitchie Dennis Ritchie"
        );
    }

    #[test]
    fn test_kpi_bar() {
        let fixture = Fixture::new();
        let record = LanguageRecord::parse("c", "title C\ntype pl\nappeared 1972").with_meta(
            RecordMeta {
                language_rank: 1,
                users: Some(1_234_567.0),
                book_count: 3,
                repo_count: Some(45_000.0),
                ..RecordMeta::default()
            },
        );
        let bar = kpi_bar(&record, &fixture.ctx());
        assert_eq!(
            bar,
            "kpiTable\n #2 on PLDB\n 52 Years Old\n 1.2m <span title=\"Crude user estimate from a linear model.\">Users</span>\n 3 <span title=\"Books about or leveraging C\">Books</span>\n 0 <span title=\"Academic publications about or leveraging C\">Papers</span>\n 45k <span title=\"C repos on GitHub.\">Repos</span>"
        );
    }

    #[test]
    fn test_try_now() {
        let record = LanguageRecord::parse("rust", "tryItOnline rust\nreplit rust");
        assert_eq!(
            try_now_repls(&record),
            "* Try now: <a href=\"https://tio.run/#rust\">TIO</a> · <a href=\"https://repl.it/languages/rust\">Replit</a>"
        );
        assert_eq!(try_now_repls(&LanguageRecord::parse("x", "")), "");
    }

    #[test]
    fn test_image_prefers_screenshot() {
        let site = SiteConfig::default();
        let record = LanguageRecord::parse(
            "scratch",
            "title Scratch\nscreenshot https://pldb.com/screenshots/scratch.png\nphoto https://pldb.com/photos/x.png",
        );
        assert!(image(&record, &site)
            .starts_with("openGraphImage image\nimage ../screenshots/scratch.png\n caption A screenshot"));

        let record = LanguageRecord::parse("x", "title X\nphoto https://example.com/x.png");
        assert_eq!(
            image(&record, &site),
            "openGraphImage image\nimage https://example.com/x.png\n caption A photo of X."
        );
        assert_eq!(image(&LanguageRecord::parse("y", ""), &site), "");
    }

    #[test]
    fn test_description_priority() {
        let record = LanguageRecord::parse(
            "c",
            "description Curated.\nwikipedia https://en.wikipedia.org/wiki/C\n summary One. Two. Three. Four.",
        );
        assert_eq!(
            description(&record),
            "* One. Two. Three. Read more on Wikipedia...\n https://en.wikipedia.org/wiki/C Read more on Wikipedia..."
        );

        let record = LanguageRecord::parse("c", "description Curated.\ngithubRepo https://g\n description Repo.");
        assert_eq!(description(&record), "* Curated.");

        let record = LanguageRecord::parse("c", "githubRepo https://g\n description Repo.");
        assert_eq!(description(&record), "* Repo.");
        assert_eq!(description(&LanguageRecord::parse("c", "")), "");
    }
}
