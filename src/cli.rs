use crate::config::{self, Config};
use crate::models::Args;
use crate::runner;
use anyhow::Result;
use clap::Parser;

/// Main CLI entry point. The only fatal error (non-zero exit) is an empty
/// resolved project list; per-project failures are logged by the runner and
/// leave the exit status at zero.
pub fn run() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_args(&args)?;
    config.ensure_dirs()?;

    let projects = if args.projects.is_empty() {
        config::read_project_list(&config.project_list_path())?
    } else {
        args.projects.clone()
    };

    if projects.is_empty() {
        anyhow::bail!("No projects to install");
    }

    runner::run_batch(&projects, &config)
}
