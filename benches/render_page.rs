use criterion::{black_box, criterion_group, criterion_main, Criterion};
use language_page::{Corpus, FeatureCatalog, IconSet, LanguageRecord, SiteConfig};

const RECORD: &str = "title Rust
type pl
appeared 2010
creators Graydon Hoare
website https://www.rust-lang.org
githubRepo https://github.com/rust-lang/rust
 stars 91234
documentation https://doc.rust-lang.org
documentation https://docs.rs
extensions rs
keywords as async await break const continue crate
example
 fn main() {
     println!(\"Hello, world!\");
 }
features
 hasComments true
  // line comment
 hasMacros true
isbndb
 title|isbn13|authors|year|publisher
 The Rust Programming Language|9781718500440|Klabnik|2019|No Starch
hackerNewsDiscussions
 id|title|time|score|comments
 9|Rust 1.0|2015-05-15 16:00:00|1000|300";

fn features() -> FeatureCatalog {
    FeatureCatalog::from_json(
        r#"[
            {"id": "hasComments", "feature": "Comments", "featureLink": "comments.html"},
            {"id": "hasMacros", "feature": "Macros", "featureLink": "macros.html"}
        ]"#,
    )
    .expect("valid catalog")
}

fn bench_render(c: &mut Criterion) {
    let features = features();
    let icons = IconSet::new();
    let site = SiteConfig::default();

    let single = Corpus::new(vec![LanguageRecord::parse("rust", RECORD)]);
    c.bench_function("render_single_page", |b| {
        b.iter(|| single.render_all(black_box(&features), &icons, &site, 2024))
    });

    let batch = Corpus::new(
        (0..200)
            .map(|i| LanguageRecord::parse(format!("lang{}", i), RECORD))
            .collect(),
    );
    c.bench_function("render_200_pages", |b| {
        b.iter(|| batch.render_all(black_box(&features), &icons, &site, 2024))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
