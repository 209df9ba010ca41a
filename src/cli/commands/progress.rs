//! ew progress - Overall and per-section progress

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human};
use crate::core::{Progress, section_progress};
use crate::error::Result;
use crate::utils::percent_bar;

use super::complete::apply_steps;

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Lesson ids to complete first, comma separated
    #[arg(long, value_delimiter = ',')]
    pub steps: Vec<String>,
}

#[derive(Serialize)]
struct SectionProgress {
    key: u32,
    title: String,
    #[serde(flatten)]
    progress: Progress,
}

#[derive(Serialize)]
struct ProgressView {
    #[serde(flatten)]
    overall: Progress,
    steps_applied: usize,
    sections: Vec<SectionProgress>,
}

pub fn run(ctx: &AppContext, args: &ProgressArgs) -> Result<()> {
    let steps = apply_steps(ctx, &args.steps, 1);
    let catalog = ctx.engine.snapshot();
    let overall = ctx.engine.progress();
    let sections: Vec<SectionProgress> = catalog
        .sections()
        .into_iter()
        .map(|key| SectionProgress {
            key,
            title: ctx.seed.section_label(key),
            progress: section_progress(&catalog, key),
        })
        .collect();

    if ctx.output_format != OutputFormat::Human {
        return ctx.emit_robot(ProgressView {
            overall,
            steps_applied: steps.len(),
            sections,
        });
    }

    let mut layout = HumanLayout::new();
    layout
        .title("Progress")
        .kv("Stars", &format!("{}/{}", overall.earned, overall.max))
        .kv(
            "Complete",
            &format!("{} {}%", percent_bar(overall.percent, 20), overall.percent),
        );
    if !steps.is_empty() {
        layout.kv("Steps applied", &steps.len().to_string());
    }
    layout.blank().section("Sections");
    for section in &sections {
        layout.kv(&section.title, &section.progress.summary());
    }
    emit_human(layout);
    Ok(())
}
