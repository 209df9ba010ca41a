//! ew path - Show the lesson path

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::OutputFormat;
use crate::cli::render::{progress_line, render_path, render_wallet};
use crate::core::{Lesson, LessonState, Progress};
use crate::error::{EwError, Result};

#[derive(Args, Debug)]
pub struct PathArgs {
    /// Only show one section
    #[arg(long, short = 's')]
    pub section: Option<u32>,
}

#[derive(Serialize)]
struct SectionView<'a> {
    key: u32,
    title: String,
    lessons: Vec<LessonView<'a>>,
}

#[derive(Serialize)]
struct LessonView<'a> {
    #[serde(flatten)]
    lesson: &'a Lesson,
    state: LessonState,
}

#[derive(Serialize)]
struct PathView<'a> {
    sections: Vec<SectionView<'a>>,
    progress: Progress,
}

pub fn run(ctx: &AppContext, args: &PathArgs) -> Result<()> {
    let catalog = ctx.engine.snapshot();
    if let Some(section) = args.section {
        if !catalog.sections().contains(&section) {
            return Err(EwError::NotFound(format!("section {section} not in catalog")));
        }
    }
    let progress = ctx.engine.progress();

    if ctx.output_format != OutputFormat::Human {
        let sections = catalog
            .sections()
            .into_iter()
            .filter(|key| args.section.is_none_or(|only| only == *key))
            .map(|key| SectionView {
                key,
                title: ctx.seed.section_label(key),
                lessons: crate::core::group_by_section(&catalog, key)
                    .into_iter()
                    .map(|lesson| LessonView {
                        lesson,
                        state: lesson.state(),
                    })
                    .collect(),
            })
            .collect();
        return ctx.emit_robot(PathView { sections, progress });
    }

    let display = &ctx.config.display;
    println!("{}", render_wallet(&ctx.wallet));
    println!("{}", progress_line(&progress));
    println!();
    println!(
        "{}",
        render_path(
            &ctx.seed,
            &catalog,
            args.section,
            display.title_width(),
            display.color
        )
    );
    Ok(())
}
