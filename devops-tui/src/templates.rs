//! Copyable and downloadable templates.
//!
//! Every code block the dashboard shows is a [`Template`]. The deploy guide
//! itself can also be downloaded as Markdown.

use std::fmt;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::catalog::{cicd, guide};
use crate::error::{Error, Result};

/// A static text document the user can copy or save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    FrontendWorkflow,
    BackendWorkflow,
    EnvFile,
    Dockerfile,
    PackageScripts,
    Guide,
}

/// Returned when a template id is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}' (expected one of: {ids})", ids = Template::ids().join(", "))]
pub struct UnknownTemplate(pub String);

impl Template {
    pub const ALL: [Template; 6] = [
        Template::FrontendWorkflow,
        Template::BackendWorkflow,
        Template::EnvFile,
        Template::Dockerfile,
        Template::PackageScripts,
        Template::Guide,
    ];

    /// Stable identifier used on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Self::FrontendWorkflow => "frontend-workflow",
            Self::BackendWorkflow => "backend-workflow",
            Self::EnvFile => "env",
            Self::Dockerfile => "dockerfile",
            Self::PackageScripts => "package-scripts",
            Self::Guide => "guide",
        }
    }

    pub fn ids() -> Vec<&'static str> {
        Self::ALL.iter().map(Template::id).collect()
    }

    /// Human-readable title used in headings and status messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::FrontendWorkflow => "Frontend Deployment Workflow",
            Self::BackendWorkflow => "Backend Deployment Workflow",
            Self::EnvFile => "Environment Variables Template",
            Self::Dockerfile => "Dockerfile for Backend",
            Self::PackageScripts => "Package.json Scripts",
            Self::Guide => "Deployment Guide",
        }
    }

    /// File name the template is saved under.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::FrontendWorkflow => "frontend.yml",
            Self::BackendWorkflow => "backend.yml",
            Self::EnvFile => ".env.example",
            Self::Dockerfile => "Dockerfile",
            Self::PackageScripts => "package-scripts.json",
            Self::Guide => "deployment-guide.md",
        }
    }

    /// Full text of the template.
    pub fn contents(&self) -> String {
        match self {
            Self::FrontendWorkflow => cicd::FRONTEND_WORKFLOW.to_string(),
            Self::BackendWorkflow => cicd::BACKEND_WORKFLOW.to_string(),
            Self::EnvFile => guide::ENV_TEMPLATE.to_string(),
            Self::Dockerfile => guide::DOCKERFILE.to_string(),
            Self::PackageScripts => guide::PACKAGE_SCRIPTS.to_string(),
            Self::Guide => guide_markdown(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Writes `template` into `dir`, creating the directory if needed.
///
/// Returns the path of the written file. Existing files are overwritten.
pub fn export(template: Template, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(template.file_name());
    let mut contents = template.contents();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    std::fs::write(&path, contents).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    tracing::info!(template = %template, path = %path.display(), "exported template");
    Ok(path)
}

/// Renders the full deployment guide as Markdown.
pub fn guide_markdown() -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "# {}\n\n{}\n", guide::TITLE, guide::SUBTITLE);

    let _ = writeln!(out, "## Deployment Platforms\n");
    for p in guide::PLATFORMS {
        let _ = writeln!(out, "- {} **{}** ({}) - {}", p.logo, p.name, p.kind, p.badge);
    }

    let _ = writeln!(out, "\n## Deployment Steps\n");
    for (heading, steps) in [
        (guide::FRONTEND_HEADING, guide::FRONTEND_STEPS),
        (guide::BACKEND_HEADING, guide::BACKEND_STEPS),
    ] {
        let _ = writeln!(out, "### {}\n", heading);
        for (i, step) in steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, step);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "## Configuration Files\n");
    for template in [
        Template::EnvFile,
        Template::Dockerfile,
        Template::PackageScripts,
    ] {
        let lang = match template {
            Template::Dockerfile => "dockerfile",
            Template::PackageScripts => "json",
            _ => "sh",
        };
        let _ = writeln!(
            out,
            "### {}\n\n```{}\n{}\n```\n",
            template.title(),
            lang,
            template.contents()
        );
    }

    let _ = writeln!(out, "## Security Checklist\n");
    for (heading, items) in [
        ("Backend Security", guide::BACKEND_SECURITY),
        ("Frontend Security", guide::FRONTEND_SECURITY),
    ] {
        let _ = writeln!(out, "### {}\n", heading);
        for item in items {
            let _ = writeln!(out, "- [x] {}", item);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "## Useful Resources\n");
    for r in guide::RESOURCES {
        let _ = writeln!(out, "- [{}]({})", r.name, r.url);
    }

    out
}
