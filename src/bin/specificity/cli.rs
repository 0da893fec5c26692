use clap::{Parser, ValueEnum};

use specificity::DumpLevel;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(value_name = "SELECTOR", help = "Selector lists to parse")]
    pub selectors: Vec<String>,

    #[arg(
        long,
        value_name = "FILE",
        conflicts_with = "selectors",
        help = "Read one selector list per line from a file"
    )]
    pub file: Option<String>,

    #[arg(
        long,
        short,
        default_value_t = VerbosityLevel::Quiet,
        value_name = "LEVEL",
        help = "Set the verbosity level"
    )]
    pub verbose: VerbosityLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VerbosityLevel {
    Quiet,
    Tree,
}

impl std::fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            VerbosityLevel::Quiet => write!(f, "quiet"),
            VerbosityLevel::Tree => write!(f, "tree"),
        }
    }
}

impl From<VerbosityLevel> for DumpLevel {
    fn from(level: VerbosityLevel) -> Self {
        match level {
            VerbosityLevel::Quiet => DumpLevel::Summary,
            VerbosityLevel::Tree => DumpLevel::Tree,
        }
    }
}
