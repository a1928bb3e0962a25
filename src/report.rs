use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::collector::TokenCollector;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub root: PathBuf,
    pub suffix: String,
    pub files: usize,
    pub unique_strings: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<PathBuf>>,
}

pub fn build_summary(
    root: PathBuf,
    suffix: String,
    collector: &TokenCollector,
    include_paths: bool,
) -> Summary {
    Summary {
        root,
        suffix,
        files: collector.file_count(),
        unique_strings: collector.unique_count(),
        paths: include_paths.then(|| collector.files().to_vec()),
    }
}

pub fn render_text(summary: &Summary) -> String {
    let mut lines: Vec<String> = summary
        .paths
        .iter()
        .flatten()
        .map(|path| path.display().to_string())
        .collect();
    lines.push(format!("Files: {}", summary.files));
    lines.push(format!("Unique strings: {}", summary.unique_strings));
    lines.join("\n")
}

pub fn render_json(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("failed to serialize summary")
}
