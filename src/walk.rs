use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::collector::Collector;
use crate::extract::extract_tokens;

pub const DEFAULT_SUFFIX: &str = ".md";

#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub root: PathBuf,
    pub suffix: String,
}

impl WalkConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub entries_seen: usize,
    pub files_matched: usize,
}

/// Walk `config.root` depth-first and hand every matching file's tokens to
/// `collector`.
///
/// Entries come in the filesystem's own order. The first traversal or read
/// error stops the walk; whatever the collector already received is kept.
pub fn walk<C>(config: &WalkConfig, collector: &mut C) -> Result<WalkStats>
where
    C: Collector + ?Sized,
{
    let mut stats = WalkStats::default();

    for entry in WalkDir::new(&config.root) {
        let entry = entry.with_context(|| format!("failed to walk {}", config.root.display()))?;
        stats.entries_seen += 1;

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if !matches_suffix(&path.to_string_lossy(), &config.suffix) {
            continue;
        }

        let tokens = extract_tokens(path)?;
        debug!(path = %path.display(), tokens = tokens.len(), "collected file");
        collector.on_file(path, tokens);
        stats.files_matched += 1;
    }

    info!(
        root = %config.root.display(),
        entries = stats.entries_seen,
        files = stats.files_matched,
        "walk finished"
    );
    Ok(stats)
}

fn matches_suffix(path: &str, suffix: &str) -> bool {
    path.ends_with(suffix)
}
