use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Receives the token set of every file the walker matches.
pub trait Collector {
    fn on_file(&mut self, path: &Path, tokens: HashSet<String>);
}

impl<F> Collector for F
where
    F: FnMut(&Path, HashSet<String>),
{
    fn on_file(&mut self, path: &Path, tokens: HashSet<String>) {
        self(path, tokens)
    }
}

/// Union of all tokens seen plus the files they came from, in visit order.
#[derive(Debug, Default)]
pub struct TokenCollector {
    tokens: HashSet<String>,
    files: Vec<PathBuf>,
}

impl TokenCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn tokens(&self) -> &HashSet<String> {
        &self.tokens
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn unique_count(&self) -> usize {
        self.tokens.len()
    }
}

impl Collector for TokenCollector {
    fn on_file(&mut self, path: &Path, tokens: HashSet<String>) {
        self.tokens.extend(tokens);
        self.files.push(path.to_path_buf());
    }
}
