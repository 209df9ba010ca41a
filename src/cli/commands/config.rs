//! ew config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::OutputFormat;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the config file path instead of its contents
    #[arg(long)]
    pub path: bool,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if ctx.output_format != OutputFormat::Human {
        if args.path {
            return ctx.emit_robot(serde_json::json!({
                "config_path": ctx.config_path,
                "ew_root": ctx.ew_root,
            }));
        }
        return ctx.emit_robot(&ctx.config);
    }

    if args.path {
        println!("{}", ctx.config_path.display());
        return Ok(());
    }
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}
