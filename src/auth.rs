use crate::config::Config;

/// Try to run a CLI command and capture stdout as a token
fn try_cli_token(command: &str) -> Option<String> {
    let output = std::process::Command::new("sh")
        .args(["-c", command])
        .output()
        .ok()?;

    if output.status.success() {
        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !token.is_empty() {
            return Some(token);
        }
    }
    None
}

/// Look up an API token, trying:
/// 1. The env var named in config (default `GITHUB_TOKEN`)
/// 2. The command named in config (default `gh auth token`)
///
/// No token is fine; requests then go out anonymously.
pub fn load_token(config: &Config) -> Option<String> {
    token_from(config, |name| std::env::var(name).ok(), try_cli_token)
}

fn token_from(
    config: &Config,
    env: impl Fn(&str) -> Option<String>,
    run: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(token) = config
        .token_env
        .as_deref()
        .and_then(env)
        .filter(|t| !t.is_empty())
    {
        tracing::debug!("using token from environment");
        return Some(token);
    }

    if let Some(token) = config.token_command.as_deref().and_then(run) {
        tracing::debug!("using token from command");
        return Some(token);
    }

    tracing::debug!("no token found, requests are anonymous");
    None
}
