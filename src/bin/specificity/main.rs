#![deny(unsafe_code)]

mod cli;

use clap::Parser as _;

use specificity::{Config, run};

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let config = Config {
        selectors: args.selectors,
        file: args.file,
        dump_level: args.verbose.into(),
    };
    run(config)
}
