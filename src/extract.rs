use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::normalize::normalize;

/// Read one file and return its distinct normalized tokens.
pub fn extract_tokens(path: &Path) -> Result<HashSet<String>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(tokens_from_bytes(&bytes))
}

/// Invalid UTF-8 is decoded lossily; the replacement characters never
/// survive normalization.
pub fn tokens_from_bytes(bytes: &[u8]) -> HashSet<String> {
    String::from_utf8_lossy(bytes)
        .split_whitespace()
        .map(normalize)
        .collect()
}
