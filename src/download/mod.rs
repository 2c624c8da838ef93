pub mod github;
pub mod http;

/// User-Agent sent on every request; the GitHub API rejects anonymous ones
pub const USER_AGENT: &str = concat!("binget/", env!("CARGO_PKG_VERSION"));
