use anyhow::Result;

use crate::parse_selector_list;
use crate::utils::PrintableTree;

/// How much of each parse result the CLI prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpLevel {
    /// One `selector -> specificity` line per entry.
    #[default]
    Summary,
    /// The full indented selector tree.
    Tree,
}

#[derive(Debug, Default)]
pub struct Config {
    pub selectors: Vec<String>,
    pub file: Option<String>,
    pub dump_level: DumpLevel,
}

pub fn run(config: Config) -> Result<()> {
    let mut inputs = config.selectors;
    if let Some(path) = &config.file {
        let text = std::fs::read_to_string(path)?;
        inputs.extend(
            text.lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty()),
        );
    }

    for input in &inputs {
        for parsed in parse_selector_list(input)? {
            match config.dump_level {
                DumpLevel::Summary => {
                    println!("{} -> {:?}", parsed.source_text, parsed.specificity)
                }
                DumpLevel::Tree => parsed.print(),
            }
        }
    }
    Ok(())
}
