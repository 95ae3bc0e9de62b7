mod app;
mod command;
mod event;
mod keybindings;
mod surfaces;

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use chartile_config::{check_collisions, validate_keybindings, AppConfig};
use chartile_layout::Layout;
use chartile_tui::theme::Theme;

use crate::app::App;
use crate::keybindings::KeybindingDispatcher;

#[derive(Parser)]
#[command(name = "chartile", about = "Tiled chart panels with draggable flex layouts", version)]
struct Cli {
    /// Path to a config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial layout, overriding the configured default
    #[arg(long)]
    layout: Option<String>,

    /// Write the default config to the config directory and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if cli.init_config {
        let path = AppConfig::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load(),
    };

    for (group, name, error) in validate_keybindings(&config.keybindings) {
        tracing::warn!("invalid keybinding [{group}] {name}: {error}");
    }
    for (key, first_group, second_group) in check_collisions(&config.keybindings) {
        tracing::warn!("key {key} is bound in both [{first_group}] and [{second_group}]");
    }

    let layout_name = cli.layout.as_deref().unwrap_or(&config.general.default_layout);
    let layout = Layout::from_str(layout_name).unwrap_or_else(|e| {
        tracing::warn!("{e}; falling back to single");
        Layout::Single
    });

    let dispatcher = KeybindingDispatcher::from_config(&config.keybindings);
    let theme = Theme::from_config(&config.theme);
    let mouse_enabled = config.general.mouse_enabled;

    install_panic_hook(mouse_enabled);

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(io::stdout(), EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(
        config.tick_rate_ms(),
        dispatcher,
        theme,
        layout,
        config.general.pixels_per_col,
        config.general.pixels_per_row,
    );
    let result = app.run(&mut terminal).await;

    if mouse_enabled {
        let _ = execute!(io::stdout(), DisableMouseCapture);
    }
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn install_panic_hook(mouse_enabled: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if mouse_enabled {
            let _ = execute!(io::stdout(), DisableMouseCapture);
        }
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
