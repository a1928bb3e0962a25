pub mod cli;
pub mod collector;
pub mod extract;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod walk;

use anyhow::Result;
use cli::{Cli, OutputFormat};
use collector::TokenCollector;
use report::{build_summary, render_json, render_text};
use walk::{WalkConfig, walk};

pub fn run(cli: &Cli) -> Result<()> {
    let config = WalkConfig::new(&cli.directory).with_suffix(&cli.suffix);
    let mut collector = TokenCollector::new();
    walk(&config, &mut collector)?;

    let summary = build_summary(config.root, config.suffix, &collector, cli.list_files);
    let output = match cli.format {
        OutputFormat::Text => render_text(&summary),
        OutputFormat::Json => render_json(&summary)?,
    };
    println!("{output}");
    Ok(())
}
