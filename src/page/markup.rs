//! Scroll markup primitives.
//!
//! The downstream compiler parses directives positionally: a keyword at the
//! start of a line, then a body indented one space per nesting level.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    CommaTable,
    PipeTable,
    TreeTable,
    KpiTable,
    MonacoEditor,
    Code,
    Html,
}

impl Directive {
    pub fn keyword(&self) -> &'static str {
        match self {
            Directive::CommaTable => "commaTable",
            Directive::PipeTable => "pipeTable",
            Directive::TreeTable => "treeTable",
            Directive::KpiTable => "kpiTable",
            Directive::MonacoEditor => "monacoEditor",
            Directive::Code => "code",
            Directive::Html => "html",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Prefix every line, blank ones included, with one space.
pub fn indent(body: &str) -> String {
    let body = body.replace('\r', "");
    format!(" {}", body.replace('\n', "\n "))
}

/// `keyword[ args]` followed by the indented body.
pub fn block(directive: Directive, args: Option<&str>, body: &str) -> String {
    match args {
        Some(args) => format!("{} {}\n{}", directive, args, indent(body)),
        None => format!("{}\n{}", directive, indent(body)),
    }
}

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank-line pattern compiles"));

/// Collapse every run of three or more newlines to exactly two.
pub fn collapse_blank_lines(document: &str) -> String {
    BLANK_RUNS.replace_all(document, "\n\n").into_owned()
}
