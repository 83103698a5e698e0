use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "devops-center",
    about = "Terminal dashboard for MERN stack deployments"
)]
#[command(version, propagate_version = true, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    tui: commands::tui::TuiArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the dashboard (default)
    Tui(commands::tui::TuiArgs),
    /// Print one section as plain text
    Render(commands::render::RenderArgs),
    /// Write templates to disk
    Export(commands::export::ExportArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui(cli.tui));

    // The dashboard owns the screen, so its logs go to a file.
    match command {
        Commands::Tui(_) => init_file_logging(cli.verbose)?,
        _ => init_stderr_logging(cli.verbose),
    }

    match command {
        Commands::Tui(args) => commands::tui::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

/// `debug` with `--verbose`, otherwise `RUST_LOG` or `info`.
fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging(verbose: bool) -> Result<()> {
    let path = devops_paths::log_file();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["devops-center"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.tui.section.is_none());
    }

    #[test]
    fn top_level_section_flag_is_accepted() {
        let cli = Cli::try_parse_from(["devops-center", "--section", "cicd"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.tui.section.as_deref(), Some("cicd"));
    }

    #[test]
    fn tui_subcommand_takes_section() {
        let cli = Cli::try_parse_from(["devops-center", "tui", "-s", "guide"]).unwrap();
        match cli.command {
            Some(Commands::Tui(args)) => assert_eq!(args.section.as_deref(), Some("guide")),
            _ => panic!("expected tui subcommand"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["devops-center", "config", "show", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn render_rejects_tiny_width() {
        assert!(Cli::try_parse_from(["devops-center", "render", "--width", "5"]).is_err());
    }

    #[test]
    fn export_requires_template_or_all() {
        assert!(Cli::try_parse_from(["devops-center", "export"]).is_err());
        assert!(Cli::try_parse_from(["devops-center", "export", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["devops-center", "export", "dockerfile"]).is_ok());
        assert!(Cli::try_parse_from(["devops-center", "export", "helm"]).is_err());
    }
}
