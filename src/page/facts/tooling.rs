//! Facts about tooling support: debuggers, packages, grammars, editors,
//! notebooks and package repositories.

use crate::error::Result;
use crate::page::facts::{linked, none, one};
use crate::page::record::LanguageRecord;
use crate::page::types::{Facts, RenderContext};
use crate::page::utils::{link_many_aftertext, pretty_url_link};
use crate::store::AttributeStore;

pub fn gdb(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("gdbSupport") {
        Some(_) => one(format!(
            "{} is supported by the <a href=\"https://www.sourceware.org/gdb/\">GDB</a>",
            record.title()
        )),
        None => none(),
    }
}

pub fn ubuntu_package(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("ubuntuPackage") {
        Some(package) => one(linked(
            format!("{} Ubuntu package", record.title()),
            &format!("https://packages.ubuntu.com/jammy/{}", package),
        )),
        None => none(),
    }
}

pub fn antlr(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("antlr") {
        Some(url) => one(format!(
            "<a href=\"antlr.html\">ANTLR</a> <a href=\"{}\">grammar</a> for {}",
            url,
            record.title()
        )),
        None => none(),
    }
}

/// One fact per LSP implementation.
pub fn lsp(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let title = record.title();
    Ok(record
        .get_all_values("languageServerProtocolProject")
        .into_iter()
        .map(|url| {
            format!(
                "{} <a href=\"language-server-protocol.html\">LSP</a> <a href=\"{}\">implementation</a>",
                title, url
            )
        })
        .collect())
}

pub fn code_mirror(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("codeMirror") {
        Some(mode) => one(format!(
            "<a href=\"codemirror.html\">CodeMirror</a> <a href=\"https://github.com/codemirror/codemirror5/tree/master/mode/{}\">package</a> for syntax highlighting {}",
            mode,
            record.title()
        )),
        None => none(),
    }
}

pub fn monaco(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("monaco") {
        Some(language) => one(format!(
            "<a href=\"monaco.html\">Monaco</a> <a href=\"https://github.com/microsoft/monaco-editor/tree/main/src/basic-languages/{}\">package</a> for syntax highlighting {}",
            language,
            record.title()
        )),
        None => none(),
    }
}

pub fn pygments(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    if record.get_scalar("pygmentsHighlighter").is_none() {
        return none();
    }
    let href = match record.get_scalar("pygmentsHighlighter filename") {
        Some(file) => format!(
            "https://github.com/pygments/pygments/blob/master/pygments/lexers/{}",
            file
        ),
        None => "https://github.com/pygments/pygments/tree/master/pygments/lexers".to_string(),
    };
    one(format!(
        "<a href=\"languages/pygments.html\">Pygments</a> supports <a href=\"{}\">syntax highlighting</a> for {}",
        href,
        record.title()
    ))
}

pub fn linguist(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    match record.get_scalar("linguistGrammarRepo") {
        Some(url) => one(format!(
            "GitHub supports <a href=\"{}\" title=\"The package used for syntax highlighting by GitHub Linguist.\">syntax highlighting</a> for {}",
            url,
            record.title()
        )),
        None => none(),
    }
}

pub fn jupyter_kernels(record: &LanguageRecord, ctx: &RenderContext<'_>) -> Result<Facts> {
    let kernels = record.get_all_values("jupyterKernel");
    let title = record.title();
    match kernels.as_slice() {
        [] => none(),
        [only] => one(format!(
            "There is 1 <a href=\"jupyter-notebook.html\">Jupyter</a> <a href=\"{}\">Kernel</a> for {}",
            only, title
        )),
        many => one(format!(
            "{} has {} <a href=\"jupyter-notebook.html\">Jupyter</a> Kernels for {}: {}",
            ctx.site.site_name,
            many.len(),
            title,
            many.iter()
                .map(|url| pretty_url_link(url))
                .collect::<Vec<_>>()
                .join(", ")
        )),
    }
}

pub fn package_repositories(record: &LanguageRecord, _ctx: &RenderContext<'_>) -> Result<Facts> {
    let repositories = record.get_all_values("packageRepository");
    let title = record.title();
    match repositories.as_slice() {
        [] => none(),
        [only] => one(format!(
            "There is a <a href=\"{}\">central package repository</a> for {}",
            only, title
        )),
        many => one(format!(
            "There are {} central package repositories for {}: {}",
            many.len(),
            title,
            link_many_aftertext(many)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::facts::test_support::Fixture;

    #[test]
    fn test_jupyter_branches() {
        let fixture = Fixture::new();
        let record = LanguageRecord::parse("r", "title R\njupyterKernel https://irkernel.github.io/");
        assert_eq!(
            jupyter_kernels(&record, &fixture.ctx()).unwrap().as_slice(),
            ["There is 1 <a href=\"jupyter-notebook.html\">Jupyter</a> <a href=\"https://irkernel.github.io/\">Kernel</a> for R"]
        );

        let record = LanguageRecord::parse(
            "r",
            "title R\njupyterKernel https://a.io\njupyterKernel https://b.io",
        );
        assert!(jupyter_kernels(&record, &fixture.ctx()).unwrap()[0]
            .starts_with("PLDB has 2 <a href=\"jupyter-notebook.html\">Jupyter</a> Kernels for R: "));
    }

    #[test]
    fn test_package_repository_branches() {
        let fixture = Fixture::new();
        let record = LanguageRecord::parse("rust", "title Rust\npackageRepository https://crates.io");
        assert_eq!(
            package_repositories(&record, &fixture.ctx()).unwrap().as_slice(),
            ["There is a <a href=\"https://crates.io\">central package repository</a> for Rust"]
        );

        let record = LanguageRecord::parse(
            "rust",
            "title Rust\npackageRepository https://crates.io\npackageRepository https://lib.rs",
        );
        assert_eq!(
            package_repositories(&record, &fixture.ctx()).unwrap().as_slice(),
            ["There are 2 central package repositories for Rust: 1. 2.\n https://crates.io 1.\n https://lib.rs 2."]
        );
    }

    #[test]
    fn test_integrations_are_independent() {
        let fixture = Fixture::new();
        let record = LanguageRecord::parse(
            "rust",
            "title Rust\nmonaco rust\nlanguageServerProtocolProject https://rust-analyzer.github.io\nlanguageServerProtocolProject https://github.com/rust-lang/rls",
        );
        let ctx = fixture.ctx();
        assert!(antlr(&record, &ctx).unwrap().is_empty());
        assert!(code_mirror(&record, &ctx).unwrap().is_empty());
        assert_eq!(lsp(&record, &ctx).unwrap().len(), 2);
        assert_eq!(monaco(&record, &ctx).unwrap().len(), 1);
    }

    #[test]
    fn test_pygments_without_filename() {
        let fixture = Fixture::new();
        let record = LanguageRecord::parse("rust", "title Rust\npygmentsHighlighter Rust");
        let facts = pygments(&record, &fixture.ctx()).unwrap();
        assert!(facts[0].contains("pygments/tree/master/pygments/lexers"));
    }
}
