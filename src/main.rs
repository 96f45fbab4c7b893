mod action;
mod app;
mod auth;
mod cli;
mod config;
mod error;
mod event;
mod fuzzy;
mod github;
mod selector;
mod sort;
mod source;
mod truncate;
mod tui;
mod types;
mod ui;

use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::App;
use crate::cli::{Cli, VERSION};
use crate::config::Config;
use crate::error::Result;
use crate::event::Event;
use crate::github::GitHub;
use crate::source::fetch_all_stars;
use crate::types::{SortKey, StarRecord};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Exits with 2 on bad flags
    let cli = Cli::parse();

    if cli.version {
        println!("hoshi v{}", VERSION);
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hoshi failed");
            eprintln!("hoshi: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let user = config::resolve_user(cli.user, &config)?;
    let order = cli
        .order
        .or(config.order.clone())
        .map(|o| SortKey::parse(&o))
        .unwrap_or_default();
    let reverse = cli.reverse || config.reverse;

    let github = GitHub::new(auth::load_token(&config), config.per_page)?;

    // Ctrl-C arrives as SIGINT until the terminal goes raw.
    let cancel = CancellationToken::new();
    let interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.cancel();
        }
    });
    let fetched = fetch_all_stars(&github, &user, &cancel).await;
    watcher.abort();
    let stars = fetched?;

    let width = tui::width()?;
    let stars = sort::sort_stars(stars, order, reverse)
        .iter()
        .map(|star| truncate::display_copy(width, star))
        .collect();

    let app = App::new(stars, user, order, reverse);
    let star = select(app).await?;
    open_in_browser(&star.url);

    Ok(())
}

/// Run the interactive selector until a star is chosen. Quitting without a
/// choice is an error.
async fn select(mut app: App) -> Result<StarRecord> {
    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut terminal = tui::init()?;
    let result = event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    tui::restore()?;
    result?;

    app.finish()
}

async fn event_loop(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = tui::EventHandler::new(render_rate);

    while let Some(event) = events.next().await {
        match event {
            Event::Render => {
                terminal.draw(|frame| ui::render(frame, app))?;
            }
            _ => {
                let action = app.handle_event(event);
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Hand the URL to the system browser. The launch is fire-and-forget.
fn open_in_browser(url: &str) {
    tracing::info!(url, "opening in browser");
    if let Err(e) = open::that_detached(url) {
        tracing::warn!(url, error = %e, "failed to open browser");
    }
}
