// Language page batch renderer
//
// Reads every `.pldb` record in THINGS_DIR, renders one `.scroll` page per
// record into OUTPUT_DIR and exits non-zero if any page failed.
// Usage: cargo run --release --features cli --bin render_pages

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use language_page::{current_year, Corpus, FeatureCatalog, IconSet, LanguageRecord, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "language_page=info,render_pages=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let things_dir = env_path("THINGS_DIR", "database/things");
    let features_path = env_path("FEATURES_PATH", "database/features.json");
    let output_dir = env_path("OUTPUT_DIR", "site/languages");
    let icons_dir = std::env::var("ICONS_DIR").ok().map(PathBuf::from);
    let site_config = std::env::var("SITE_CONFIG").ok().map(PathBuf::from);

    tracing::info!("Configuration:");
    tracing::info!("  THINGS_DIR: {}", things_dir.display());
    tracing::info!("  FEATURES_PATH: {}", features_path.display());
    tracing::info!("  OUTPUT_DIR: {}", output_dir.display());

    let site = match &site_config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading site config {}", path.display()))?;
            serde_json::from_str::<SiteConfig>(&raw)
                .with_context(|| format!("parsing site config {}", path.display()))?
        }
        None => SiteConfig::default(),
    };

    let features_json = fs::read_to_string(&features_path)
        .with_context(|| format!("reading feature catalog {}", features_path.display()))?;
    let features = FeatureCatalog::from_json(&features_json)?;
    tracing::info!("Loaded {} features", features.len());

    let icons = match &icons_dir {
        Some(dir) => load_icons(dir)?,
        None => IconSet::new(),
    };

    let records = load_records(&things_dir)?;
    tracing::info!("Loaded {} records", records.len());
    let corpus = Corpus::new(records);

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;

    let mut failed = 0;
    for (id, page) in corpus.render_all(&features, &icons, &site, current_year()) {
        match page {
            Ok(page) => {
                let path = output_dir.join(format!("{}.scroll", id));
                fs::write(&path, page).with_context(|| format!("writing {}", path.display()))?;
            }
            Err(e) => {
                tracing::error!("{}: {}", id, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} pages failed to render", failed, corpus.len());
    }
    tracing::info!("Wrote {} pages to {}", corpus.len(), output_dir.display());
    Ok(())
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Files in `dir` with the given extension, sorted by file stem.
fn files_with_extension(dir: &Path, extension: &str) -> anyhow::Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push((stem.to_string(), path.clone()));
        }
    }
    files.sort();
    Ok(files)
}

fn load_records(dir: &Path) -> anyhow::Result<Vec<LanguageRecord>> {
    files_with_extension(dir, "pldb")?
        .into_iter()
        .map(|(id, path)| {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(LanguageRecord::parse(id, &text))
        })
        .collect()
}

fn load_icons(dir: &Path) -> anyhow::Result<IconSet> {
    let mut icons = IconSet::new();
    for (key, path) in files_with_extension(dir, "svg")? {
        let svg = fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        icons.insert(key, svg.trim());
    }
    Ok(icons)
}
