//! ew leaderboard - Weekly standings

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human};
use crate::error::Result;
use crate::seed::{LeaderboardEntry, last_week_rank, seed_leaderboard};

#[derive(Args, Debug)]
pub struct LeaderboardArgs {
    /// Show only the top N entries
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Serialize)]
struct LeaderboardView {
    entries: Vec<LeaderboardEntry>,
    last_week_rank: usize,
}

pub fn run(ctx: &AppContext, args: &LeaderboardArgs) -> Result<()> {
    let mut entries = seed_leaderboard();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if ctx.output_format != OutputFormat::Human {
        return ctx.emit_robot(LeaderboardView {
            entries,
            last_week_rank: last_week_rank(),
        });
    }

    let mut layout = HumanLayout::new();
    layout.title("Leaderboard");
    for entry in &entries {
        let rank = format!("{:>2}.", entry.rank);
        let rank = if entry.rank <= 3 {
            rank.yellow().bold().to_string()
        } else {
            rank
        };
        layout.push_line(format!(
            "{rank} {} {:<18} {:>5} XP",
            entry.avatar, entry.name, entry.xp
        ));
    }
    layout
        .blank()
        .push_line(format!("You finished #{} last week.", last_week_rank()));
    emit_human(layout);
    Ok(())
}
