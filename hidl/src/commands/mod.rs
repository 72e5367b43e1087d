mod check;
mod completions;
mod emit;
mod sections;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use emit::EmitCommand;
use eyre::Result;
use sections::SectionsCommand;

/// Extension trait for exiting on snippet-table errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for hidlgen_snippets::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "hidlgen")]
#[command(version)]
#[command(about = "Render interface definitions through snippet tables")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp(None)
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Emit(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Sections(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a unit for one section or for every section
    Emit(EmitCommand),

    /// Run every section without writing output and report problems
    Check(CheckCommand),

    /// List the sections of a snippet table
    Sections(SectionsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
