use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{HoshiError, Result};
use crate::github::DEFAULT_PER_PAGE;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub login whose stars are listed.
    pub user: Option<String>,
    /// Default `--order` value.
    pub order: Option<String>,
    pub reverse: bool,
    pub per_page: u32,
    pub token_env: Option<String>,
    pub token_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            order: None,
            reverse: false,
            per_page: DEFAULT_PER_PAGE,
            token_env: Some("GITHUB_TOKEN".to_string()),
            token_command: Some("gh auth token".to_string()),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("hoshi").join("config.toml"))
}

impl Config {
    /// Read `~/.config/hoshi/config.toml`. A missing or unreadable file
    /// yields the defaults.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Config::default();
        };

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Config::default();
        };

        match toml::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }
        }
    }
}

/// Work out whose stars to list: the `--user` flag, then the config file,
/// then `git config github.user`.
pub fn resolve_user(cli_user: Option<String>, config: &Config) -> Result<String> {
    pick_user(cli_user, config, git_config_user)
}

fn pick_user(
    cli_user: Option<String>,
    config: &Config,
    git_user: impl FnOnce() -> Option<String>,
) -> Result<String> {
    cli_user
        .or_else(|| config.user.clone())
        .filter(|u| !u.trim().is_empty())
        .or_else(git_user)
        .ok_or_else(|| {
            HoshiError::Config(
                "cannot determine GitHub user; pass --user or run `git config --global github.user <login>`"
                    .to_string(),
            )
        })
}

fn git_config_user() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["config", "--get", "github.user"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let user = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if user.is_empty() {
        None
    } else {
        Some(user)
    }
}
