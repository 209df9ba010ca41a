//! ew extract - Pull readable text out of an uploaded document

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human};
use crate::documents::extract_file;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// HTML or plain-text file
    pub file: PathBuf,

    /// Print only the paragraph text
    #[arg(long)]
    pub text_only: bool,
}

pub fn run(ctx: &AppContext, args: &ExtractArgs) -> Result<()> {
    let document = extract_file(&args.file, &ctx.config.documents)?;

    if ctx.output_format != OutputFormat::Human {
        return ctx.emit_robot(document);
    }
    if args.text_only {
        println!("{}", document.text());
        return Ok(());
    }

    let mut layout = HumanLayout::new();
    layout.title(document.title.as_deref().unwrap_or("Untitled document"));
    layout.kv("Words", &document.word_count.to_string());
    if document.truncated {
        layout.kv("Truncated", "paragraph limit reached");
    }
    if !document.headings.is_empty() {
        layout.blank().section("Headings");
        for heading in &document.headings {
            layout.bullet(heading);
        }
    }
    layout.blank().section("Text");
    for paragraph in &document.paragraphs {
        for line in textwrap::wrap(paragraph, 80) {
            layout.push_line(line.into_owned());
        }
        layout.blank();
    }
    if !document.links.is_empty() {
        layout.section("Links");
        for link in &document.links {
            layout.bullet(&format!("{} <{}>", link.text, link.href));
        }
    }
    emit_human(layout);
    Ok(())
}
