use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Browse your GitHub stars, fuzzy-search them and open one in the browser.
#[derive(Parser, Debug)]
#[command(name = "hoshi", disable_version_flag = true)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "KEY",
        help = "Change item order: added-at, author-name, created-at, updated-at, repository-name"
    )]
    pub order: Option<String>,

    #[arg(short, long, help = "Reverse item order")]
    pub reverse: bool,

    #[arg(short, long, help = "Show hoshi version")]
    pub version: bool,

    #[arg(
        short,
        long,
        value_name = "LOGIN",
        help = "GitHub user whose stars to list (default: git config github.user)"
    )]
    pub user: Option<String>,
}
