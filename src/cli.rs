use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::walk::DEFAULT_SUFFIX;

#[derive(Parser, Debug)]
#[command(name = "resonate")]
#[command(about = "Count distinct normalized words across a tree of Markdown files", long_about = None)]
pub struct Cli {
    /// Directory to scan recursively.
    #[arg(value_name = "directory")]
    pub directory: PathBuf,
    /// Only files whose path ends with this suffix are read.
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,
    /// Output format for the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print every processed file before the summary.
    #[arg(long)]
    pub list_files: bool,
    /// Log each processed file to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    Text,
    Json,
}
