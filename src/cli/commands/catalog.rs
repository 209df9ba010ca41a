//! ew catalog - Show or validate a lesson catalog
//!
//! Without a file argument this works on the session catalog (config
//! `catalog.path`, or the built-in one).

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human};
use crate::error::Result;
use crate::seed::SeedCatalog;
use crate::seed::loader::{CatalogReport, inspect, load_catalog_file, read_catalog_file};
use crate::utils::pluralize;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Catalog file to load instead of the configured one (.toml or .json)
    pub file: Option<PathBuf>,

    /// Validate only and print a summary
    #[arg(long)]
    pub check: bool,
}

pub fn run(ctx: &AppContext, args: &CatalogArgs) -> Result<()> {
    let allow_duplicates = ctx.config.catalog.allow_duplicate_ids;
    if args.check {
        let file = match &args.file {
            Some(path) => read_catalog_file(path)?,
            None => ctx.seed.to_file(),
        };
        return check(ctx, &inspect(&file, allow_duplicates));
    }

    let loaded;
    let seed: &SeedCatalog = match &args.file {
        Some(path) => {
            loaded = load_catalog_file(path, allow_duplicates)?;
            &loaded
        }
        None => &ctx.seed,
    };

    if ctx.output_format != OutputFormat::Human {
        return ctx.emit_robot(seed.to_file());
    }
    print!("{}", toml::to_string_pretty(&seed.to_file())?);
    Ok(())
}

/// Report validation results. An invalid catalog is reported, not raised.
fn check(ctx: &AppContext, report: &CatalogReport) -> Result<()> {
    if ctx.output_format != OutputFormat::Human {
        return ctx.emit_robot(report);
    }

    let mut layout = HumanLayout::new();
    if report.valid {
        layout.push_line(format!("{} Catalog is valid", "✓".green().bold()));
    } else {
        layout.push_line(format!("{} Catalog is invalid", "✗".red().bold()));
    }
    layout.blank().push_line(format!(
        "{} in {}",
        pluralize(report.lessons, "lesson", "lessons"),
        pluralize(report.sections, "section", "sections")
    ));
    if !report.duplicate_ids.is_empty() {
        layout.kv("Duplicate ids", &report.duplicate_ids.join(", "));
    }
    for problem in &report.problems {
        layout.bullet(problem);
    }
    emit_human(layout);
    Ok(())
}
