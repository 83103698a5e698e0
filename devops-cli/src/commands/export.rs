//! Export command - writes templates to disk

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{ArgGroup, Args};

use devops_tui::{Template, export};

use crate::config::ConfigLoader;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selection").required(true).args(["template", "all"])))]
#[command(after_long_help = "\
Templates:
  frontend-workflow   .github workflow for the React frontend (frontend.yml)
  backend-workflow    .github workflow for the Express backend (backend.yml)
  env                 frontend environment variables (.env.example)
  dockerfile          backend Dockerfile
  package-scripts     package.json scripts (package-scripts.json)
  guide               the full deployment guide (deployment-guide.md)
")]
pub struct ExportArgs {
    /// Template to export
    pub template: Option<Template>,

    /// Export every template
    #[arg(long)]
    pub all: bool,

    /// Output directory (default: export.dir from config)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let dir = match args.out {
        Some(dir) => dir,
        None => ConfigLoader::load()?.export.dir,
    };

    for path in export_selected(args.template, args.all, &dir)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn export_selected(template: Option<Template>, all: bool, dir: &Path) -> Result<Vec<PathBuf>> {
    let selected: Vec<Template> = if all {
        Template::ALL.to_vec()
    } else {
        template.into_iter().collect()
    };

    selected
        .into_iter()
        .map(|template| export(template, dir).map_err(anyhow::Error::from))
        .collect()
}
