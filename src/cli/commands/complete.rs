//! ew complete - Complete lesson steps
//!
//! Completions apply in argument order within one session. Unknown and
//! locked lessons are reported and skipped, never treated as errors.

use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::OutputFormat;
use crate::cli::render::progress_line;
use crate::core::{Catalog, Progress, StepOutcome};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// Lesson ids to complete, in order
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,

    /// Repeat each completion N times
    #[arg(long, short = 'n', default_value = "1")]
    pub times: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepResult {
    StarAwarded,
    AlreadyFinished,
    Locked,
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct StepReport {
    pub lesson_id: String,
    pub result: StepResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newly_unlocked: Option<String>,
}

impl StepReport {
    fn from_outcome(lesson_id: &str, before: &Catalog, outcome: StepOutcome) -> Self {
        let result = match &outcome.lesson {
            None => StepResult::NotFound,
            Some(lesson) if !lesson.unlocked => StepResult::Locked,
            Some(_) if outcome.changed(before) => StepResult::StarAwarded,
            Some(_) => StepResult::AlreadyFinished,
        };
        Self {
            lesson_id: lesson_id.to_string(),
            result,
            stars: outcome.lesson.as_ref().map(|lesson| lesson.stars),
            total: outcome.lesson.as_ref().map(|lesson| lesson.total),
            newly_unlocked: outcome.newly_unlocked,
        }
    }

    fn human_line(&self) -> String {
        let id = self.lesson_id.cyan();
        let stars = format!("{}/{}", self.stars.unwrap_or(0), self.total.unwrap_or(0));
        let mut line = match self.result {
            StepResult::StarAwarded => format!("{} {id} {stars}", "★".yellow().bold()),
            StepResult::AlreadyFinished => format!("{} {id} already finished", "=".dimmed()),
            StepResult::Locked => format!("🔒 {id} is locked, skipped"),
            StepResult::NotFound => format!("{} {id} not found, skipped", "!".yellow()),
        };
        if let Some(next) = &self.newly_unlocked {
            line.push_str(&format!("  {} unlocked {}", "→".green(), next.cyan()));
        }
        line
    }
}

#[derive(Serialize)]
struct CompleteView {
    steps: Vec<StepReport>,
    progress: Progress,
}

pub fn run(ctx: &AppContext, args: &CompleteArgs) -> Result<()> {
    let steps = apply_steps(ctx, &args.ids, args.times);
    let progress = ctx.engine.progress();

    if ctx.output_format != OutputFormat::Human {
        return ctx.emit_robot(CompleteView { steps, progress });
    }

    for step in &steps {
        println!("{}", step.human_line());
    }
    println!();
    println!("{}", progress_line(&progress));
    Ok(())
}

/// Run `ids`, each `times` times, against the session engine.
pub fn apply_steps(ctx: &AppContext, ids: &[String], times: u32) -> Vec<StepReport> {
    let mut reports = Vec::new();
    for id in ids {
        for _ in 0..times {
            let before = ctx.engine.snapshot();
            let outcome = ctx.engine.complete_step(id);
            reports.push(StepReport::from_outcome(id, &before, outcome));
        }
    }
    reports
}
