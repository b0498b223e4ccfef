//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Bosun - a build orchestrator for CMake + Ninja projects
#[derive(Parser)]
#[command(name = "bosun")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure and build the project
    Build(BuildArgs),

    /// Build the release configuration and install it
    Install,

    /// Build the example projects against the installed artifacts
    Examples,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Build configuration (debug or release)
    #[arg(long)]
    pub config: Option<String>,

    /// Build target (default: all)
    #[arg(long)]
    pub target: Option<String>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
