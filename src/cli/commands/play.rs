//! ew play - Interactive lesson path

use clap::Args;

use crate::app::AppContext;
use crate::error::{EwError, Result};
use crate::tui::run_play;

#[derive(Args, Debug)]
pub struct PlayArgs {}

pub fn run(ctx: &AppContext, _args: &PlayArgs) -> Result<()> {
    if ctx.robot_mode {
        return Err(EwError::Terminal(
            "play is interactive and has no robot output".to_string(),
        ));
    }
    run_play(ctx)
}
