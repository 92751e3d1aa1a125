//! Facts about adoption: repositories, communities, surveys, rankings and
//! job counts.

use crate::error::Result;
use crate::page::facts::{none, one};
use crate::page::record::LanguageRecord;
use crate::page::types::{Facts, RenderContext};
use crate::page::utils::{format_abbreviated, format_count, format_rounded, format_thousands, parse_number};
use crate::store::{AttributeStore, Node};

/// Job estimates at or below this are not worth a fact.
const MIN_JOBS: f64 = 10.0;

const TIOBE_URL: &str = "https://www.tiobe.com/tiobe-index/";

pub fn github_language_repos(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (language, count) = match (
        record.get_scalar("githubLanguage"),
        record.get_scalar("githubLanguage repos"),
    ) {
        (Some(language), Some(count)) => (language, count),
        _ => return none(),
    };
    one(format!(
        "There are at least {} {} repos on <a href=\"https://github.com/search?q=language:{}\">GitHub</a>",
        format_count(count),
        record.title(),
        language
    ))
}

pub fn job_estimate(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.meta().job_count {
        Some(jobs) if jobs > MIN_JOBS => one(format!(
            "{} estimates there are currently {} job openings for {} programmers.",
            ctx.site.site_name,
            format_abbreviated(jobs, 0),
            record.title()
        )),
        _ => none(),
    }
}

pub fn conferences(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let links: Vec<String> = record
        .tree()
        .find_nodes("conference")
        .filter_map(|node| {
            let url = node.word(1).filter(|u| !u.is_empty())?;
            Some(format!("<a href=\"{}\">{}</a>", url, node.words_from(2)))
        })
        .collect();
    if links.is_empty() {
        return none();
    }
    one(format!(
        "Recurring conference about {}: {}",
        record.title(),
        links.join(", ")
    ))
}

pub fn github_big_query(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let language = match record.get_scalar("githubBigQuery") {
        Some(language) => language,
        None => return none(),
    };
    let users = record.get_scalar("githubBigQuery users").and_then(parse_number);
    let repos = record.get_scalar("githubBigQuery repos").and_then(parse_number);
    let (users, repos) = match (users, repos) {
        (Some(users), Some(repos)) => (users, repos),
        _ => return none(),
    };
    one(format!(
        "The Google BigQuery Public Dataset GitHub snapshot shows {} users using {} in {} repos on <a href=\"https://api.github.com/search/repositories?q=language:{}\">GitHub</a>",
        format_abbreviated(users, 0),
        record.title(),
        format_abbreviated(repos, 0),
        language
    ))
}

pub fn meetup(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let url = match record.get_scalar("meetup") {
        Some(url) => url,
        None => return none(),
    };
    let count = record
        .get_scalar("meetup groupCount")
        .map(|count| format!("{} ", format_count(count)))
        .unwrap_or_default();
    one(format!(
        "Check out the {}<a href=\"{}/\">{} meetup groups</a> on Meetup.com.",
        count,
        url,
        record.title()
    ))
}

pub fn announcement(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let url = match record.get_scalar("firstAnnouncement") {
        Some(url) => url,
        None => return none(),
    };
    let method = record
        .get_scalar("announcementMethod")
        .map(|method| format!(" via {}", method))
        .unwrap_or_default();
    one(format!(
        "<a href=\"{}\">First announcement of</a> {}{}",
        url,
        record.title(),
        method
    ))
}

pub fn subreddit(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (url, members) = match (
        record.get_scalar("subreddit"),
        record.most_recent_int("subreddit memberCount"),
    ) {
        (Some(url), Some(members)) => (url, members),
        _ => return none(),
    };
    one(format!(
        "There are {} members in the <a href=\"{}\">{} subreddit</a>",
        format_thousands(members as f64),
        url,
        record.title()
    ))
}

pub fn project_euler(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (language, members) = match (
        record.get_scalar("projectEuler"),
        record.most_recent_int("projectEuler memberCount"),
    ) {
        (Some(language), Some(members)) => (language, members),
        _ => return none(),
    };
    one(format!(
        "There are {} <a href=\"https://projecteuler.net/language={}\">Project Euler</a> users using {}",
        format_thousands(members as f64),
        language,
        record.title()
    ))
}

/// Latest year-keyed child of the survey group.
fn latest_survey(record: &LanguageRecord) -> Option<(i32, &Node)> {
    record
        .get_group("stackOverflowSurvey")?
        .children()
        .iter()
        .filter_map(|node| node.key().parse::<i32>().ok().map(|year| (year, node)))
        .max_by_key(|(year, _)| *year)
}

/// Salary, usage share and user/fan counts. Each sentence is dropped on its
/// own when its fields are missing.
pub fn survey(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (year, survey) = match latest_survey(record) {
        Some(found) => found,
        None => return none(),
    };
    let title = record.title();
    let field = |name: &str| survey.get_scalar(name).and_then(parse_number);

    let intro = format!(
        "In the {} StackOverflow <a href=\"https://insights.stackoverflow.com/survey\">developer survey</a>",
        year
    );
    let mut sentences = Vec::new();
    if let Some(salary) = field("medianSalary") {
        sentences.push(format!(
            "{} {} programmers reported a median salary of ${}.",
            intro,
            title,
            format_thousands(salary)
        ));
    }
    if let Some(share) = field("percentageUsing") {
        sentences.push(format!(
            "{}% of respondents reported using {}.",
            format_rounded(share * 100.0, 2),
            title
        ));
    }
    if let (Some(users), Some(fans)) = (field("users"), field("fans")) {
        sentences.push(format!(
            "{} programmers reported using {}, and {} said they wanted to use it",
            format_thousands(users),
            title,
            format_thousands(fans)
        ));
    }

    if sentences.is_empty() {
        return none();
    }
    if field("medianSalary").is_none() {
        sentences.insert(0, format!("{}:", intro));
    }
    one(sentences.join(" "))
}

pub fn rosetta_code(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("rosettaCode") {
        Some(category) => one(format!(
            "Explore {} snippets on <a href=\"http://www.rosettacode.org/wiki/Category:{}\">Rosetta Code</a>",
            record.title(),
            category
        )),
        None => none(),
    }
}

/// Rank when known, otherwise bare presence in the index.
pub fn tiobe(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let title = record.title();
    if let Some(rank) = record.get_scalar("tiobe currentRank") {
        return one(format!(
            "{} ranks #{} in the <a href=\"{}\">TIOBE Index</a>",
            title, rank, TIOBE_URL
        ));
    }
    match record.get_scalar("tiobe") {
        Some(_) => one(format!(
            "{} appears in the <a href=\"{}\">TIOBE Index</a>",
            title, TIOBE_URL
        )),
        None => none(),
    }
}

pub fn quine_relay(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("quineRelay") {
        Some(_) => one(format!(
            "{} appears in the <a href=\"https://github.com/mame/quine-relay\">Quine Relay</a> project",
            record.title()
        )),
        None => none(),
    }
}

pub fn indeed_jobs(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let (query, count) = match (
        record.get_scalar("indeedJobs"),
        record.most_recent_int("indeedJobs"),
    ) {
        (Some(query), Some(count)) => (query, count),
        _ => return none(),
    };
    one(format!(
        "Indeed.com has {} matches for <a href=\"https://www.indeed.com/jobs?q={}\">\"{}\"</a>.",
        format_thousands(count as f64),
        query,
        query
    ))
}
