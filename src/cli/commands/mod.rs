//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod catalog;
pub mod complete;
pub mod completions;
pub mod config;
pub mod extract;
pub mod leaderboard;
pub mod path;
pub mod play;
pub mod progress;

use crate::app::AppContext;
use crate::error::Result;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Path(args) => path::run(ctx, args),
        Commands::Complete(args) => complete::run(ctx, args),
        Commands::Progress(args) => progress::run(ctx, args),
        Commands::Leaderboard(args) => leaderboard::run(ctx, args),
        Commands::Catalog(args) => catalog::run(ctx, args),
        Commands::Extract(args) => extract::run(ctx, args),
        Commands::Play(args) => play::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        // Needs no session; main handles it before a context exists.
        Commands::Completions(args) => completions::run(args),
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the lesson path with stars and progress
    Path(path::PathArgs),

    /// Complete lesson steps (one star each) within this session
    Complete(complete::CompleteArgs),

    /// Show overall progress, optionally after completing steps
    Progress(progress::ProgressArgs),

    /// Show the weekly leaderboard
    Leaderboard(leaderboard::LeaderboardArgs),

    /// Show or validate the lesson catalog
    Catalog(catalog::CatalogArgs),

    /// Extract readable text from an uploaded document
    Extract(extract::ExtractArgs),

    /// Play the path in an interactive terminal UI
    Play(play::PlayArgs),

    /// Show the effective configuration
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
