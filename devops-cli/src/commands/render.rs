//! Render command - prints one section as plain text
//!
//! Uses the same renderer as the dashboard on an off-screen terminal, so
//! the output matches what the TUI shows at that size.

use anyhow::Result;
use clap::Args;

use devops_tui::{Section, render_snapshot};

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Section to render (dashboard, cicd, monitoring, guide)
    #[arg(long, short, default_value = "dashboard")]
    pub section: String,

    /// Terminal width in columns
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(20..))]
    pub width: u16,

    /// Terminal height in rows (default: tall enough for the whole section)
    #[arg(long, value_parser = clap::value_parser!(u16).range(3..))]
    pub height: Option<u16>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let section = Section::resolve(&args.section);
    print!("{}", snapshot(section, &args)?);
    Ok(())
}

fn snapshot(section: Section, args: &RenderArgs) -> Result<String> {
    Ok(render_snapshot(section, args.width, args.height)?)
}
