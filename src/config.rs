use crate::models::{Args, Preference, SelectionPolicy};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "binget";
const PROJECT_LIST_FILE: &str = "projects.txt";

/// Process-wide configuration, built once at startup and passed by reference.
/// Components never reach for ambient state beyond this.
#[derive(Debug, Clone)]
pub struct Config {
    /// One cached release JSON per project
    pub cache_dir: PathBuf,
    /// One downloaded archive per selected asset
    pub download_dir: PathBuf,
    /// Holds the persisted project list
    pub config_dir: PathBuf,
    /// Flat destination for installed executables; expected to be on PATH
    pub bin_dir: PathBuf,
    pub policy: SelectionPolicy,
    pub verbose: bool,
    pub dev_mode: bool,
    pub force: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Config> {
        let home = dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let preference = if args.prefer_musl {
            Preference::Musl
        } else if args.appimage {
            Preference::AppImage
        } else {
            Preference::None
        };

        Ok(Config {
            cache_dir: dirs::cache_dir()
                .unwrap_or_else(|| home.join(".cache"))
                .join(APP_DIR),
            download_dir: dirs::download_dir()
                .unwrap_or_else(|| home.join("Downloads"))
                .join(APP_DIR),
            config_dir: dirs::config_dir()
                .unwrap_or_else(|| home.join(".config"))
                .join(APP_DIR),
            bin_dir: home.join(".local").join("bin"),
            policy: SelectionPolicy {
                preference,
                ..SelectionPolicy::default()
            },
            verbose: args.verbose,
            dev_mode: args.dev,
            force: args.force,
        })
    }

    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [
            &self.cache_dir,
            &self.download_dir,
            &self.config_dir,
            &self.bin_dir,
        ] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Cache file for a project's release JSON, keyed by the project id with
    /// slashes made filename-safe
    pub fn catalog_path(&self, project: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}_assets.json", project.replace('/', "_")))
    }

    pub fn project_list_path(&self) -> PathBuf {
        self.config_dir.join(PROJECT_LIST_FILE)
    }
}

/// Read the persisted project list: one "owner/repo" per line, `#` starts a
/// trailing comment, blank lines are skipped. A missing file is an empty list.
pub fn read_project_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project list: {}", path.display()))?;

    Ok(content
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
