//! TUI command - launches the terminal user interface
//!
//! Opens the full-screen dashboard on the configured (or requested)
//! section.

use anyhow::Result;
use clap::Args;
use tracing::info;

use devops_tui::{App, Section, install_panic_hook};

use crate::config::ConfigLoader;

#[derive(Args, Debug, Default)]
#[command(after_long_help = "\
Examples:
  devops-center                         Launch the dashboard
  devops-center tui --section cicd      Open the CI/CD section
  devops-center --section guide         Same, without the subcommand
")]
pub struct TuiArgs {
    /// Section to open first (dashboard, cicd, monitoring, guide)
    #[arg(long, short)]
    pub section: Option<String>,
}

pub fn run(args: TuiArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let mut tui_config = config.tui_config();

    // Unknown ids fall back to the dashboard with a warning.
    if let Some(id) = &args.section {
        tui_config.initial_section = Section::resolve(id);
    }

    info!(
        section = %tui_config.initial_section,
        export_dir = %tui_config.export_dir.display(),
        "Starting TUI..."
    );

    install_panic_hook();
    let mut app = App::with_config(tui_config);
    app.run()?;

    info!("TUI exited");
    Ok(())
}
