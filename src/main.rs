use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rotating_connect_five::ai::{build_provider, PlayerKind};
use rotating_connect_five::config::AppConfig;
use rotating_connect_five::game::Player;
use rotating_connect_five::ui::App;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Seat {
    Red,
    Yellow,
}

/// Play Connect Five on a rotating board in the terminal.
#[derive(Parser)]
#[command(name = "rotating-connect-five", version, about)]
struct Cli {
    /// Who plays the other colour (human = two players at one keyboard)
    #[arg(long, value_enum, default_value = "random")]
    opponent: PlayerKind,

    /// Colour you play; red moves first
    #[arg(long, value_enum, default_value = "red")]
    play_as: Seat,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// File searched for `export KEY=...` lines when an API key is not set
    #[arg(long, default_value = ".env")]
    dotenv: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override moves between rotations
    #[arg(long)]
    rotation_interval: Option<usize>,

    /// Never rotate the board
    #[arg(long)]
    no_rotation: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // stderr would tear the alternate screen, so logging is opt-in here
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(interval) = cli.rotation_interval {
        config.rules.rotation_interval = interval;
    }
    if cli.no_rotation {
        config.rules.rotation_enabled = false;
    }
    config.validate().context("invalid settings")?;

    let opponent = match cli.opponent {
        PlayerKind::Human => None,
        kind => Some(
            build_provider(kind, &config, &cli.dotenv)
                .with_context(|| format!("setting up {}", kind.display_name()))?,
        ),
    };
    let human = match cli.play_as {
        Seat::Red => Player::Red,
        Seat::Yellow => Player::Yellow,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.game_rules(), human, opponent);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res?;
    Ok(())
}
