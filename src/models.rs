use clap::Parser;
use serde::Deserialize;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// GitHub projects in "owner/repo" format (reads the project list file if none given)
    pub projects: Vec<String>,

    /// Echo the raw release JSON for each project
    #[arg(short, long)]
    pub verbose: bool,

    /// Development mode: reuse cached asset lists, skip download and extraction
    #[arg(short, long)]
    pub dev: bool,

    /// Prefer musl builds
    #[arg(short = 'm', long = "prefer-musl", conflicts_with = "appimage")]
    pub prefer_musl: bool,

    /// Prefer AppImage builds
    #[arg(short = 'A', long)]
    pub appimage: bool,

    /// Drop cached asset lists and downloaded archives before fetching
    #[arg(short, long)]
    pub force: bool,
}

/// GitHub release information (extra API fields are ignored)
#[derive(Debug, Deserialize)]
pub struct GitHubRelease {
    pub tag_name: Option<String>,
    #[serde(default)]
    pub assets: Vec<GitHubAsset>,
}

/// GitHub release asset information
#[derive(Debug, Deserialize)]
pub struct GitHubAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// Which packaging variant to insist on among otherwise acceptable assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    #[default]
    None,
    Musl,
    AppImage,
}

/// Substring rules deciding which single asset of a release is installable
/// on this platform. The policy is data so it can be swapped without touching
/// the selector.
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    /// Asset name must contain this (a 64-bit marker by default)
    pub accept: String,
    /// Asset name must contain none of these
    pub reject: Vec<String>,
    pub preference: Preference,
}

/// Foreign OS/arch markers and packaging formats that need an installer
const DEFAULT_REJECT: &[&str] = &[
    "mac",
    "macos",
    "darwin",
    "apple",
    "win",
    "bsd",
    "arm",
    "aarch",
    "ppc",
    "i686",
    "sha256",
    ".deb",
    ".rpm",
    ".apk",
    ".sig",
    "proxy-linux",
];

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy {
            accept: "64".to_string(),
            reject: DEFAULT_REJECT.iter().map(|s| s.to_string()).collect(),
            preference: Preference::None,
        }
    }
}

impl SelectionPolicy {
    /// Accept/reject filter; preference is applied separately by the selector
    pub fn qualifies(&self, asset_name: &str) -> bool {
        asset_name.contains(&self.accept) && !self.reject.iter().any(|r| asset_name.contains(r))
    }
}
