use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use rotating_connect_five::ai::{build_provider, PlayerKind};
use rotating_connect_five::arena::play_match;
use rotating_connect_five::config::AppConfig;
use rotating_connect_five::game::{Game, GameOutcome, Player, TurnReport};
use rotating_connect_five::ui::TextRenderer;

/// Run a headless match between two move providers, printing each turn.
#[derive(Parser)]
#[command(name = "arena", about = "Pit two Connect Five players against each other")]
struct Cli {
    /// Player 1 (X, moves first)
    #[arg(long, value_enum)]
    red: Option<PlayerKind>,

    /// Player 2 (O)
    #[arg(long, value_enum)]
    yellow: Option<PlayerKind>,

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

    /// Override the pause between turns, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for fallback moves, for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(red) = cli.red {
        config.players.red = red;
    }
    if let Some(yellow) = cli.yellow {
        config.players.yellow = yellow;
    }
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
    if let Some(delay) = cli.delay_ms {
        config.pacing.turn_delay_ms = delay;
    }
    config.validate().context("invalid settings")?;

    let red_kind = config.players.red;
    let yellow_kind = config.players.yellow;
    let mut red = build_provider(red_kind, &config, &cli.dotenv)
        .with_context(|| format!("setting up {} for red", red_kind.display_name()))?;
    let mut yellow = build_provider(yellow_kind, &config, &cli.dotenv)
        .with_context(|| format!("setting up {} for yellow", yellow_kind.display_name()))?;

    let rules = config.game_rules();
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(rules, seed),
        None => Game::new(rules),
    };

    println!(
        "Connect 5 with rotation: {} (X) vs {} (O)",
        red.name(),
        yellow.name()
    );
    if rules.rotation_enabled {
        println!(
            "Board rotates 90° clockwise every {} moves; gravity always pulls down.",
            rules.rotation_interval
        );
    }

    let names = [red.name().to_string(), yellow.name().to_string()];
    let mut renderer = TextRenderer::new(io::stdout());
    let outcome = play_match(
        &mut game,
        red.as_mut(),
        yellow.as_mut(),
        &mut renderer,
        Duration::from_millis(config.pacing.turn_delay_ms),
        |game, report| print_turn(game, report, &names),
    );

    match outcome {
        GameOutcome::Winner(player) => println!(
            "\n{} (Player {}) wins after {} moves!",
            names[seat(player)],
            player.id(),
            game.history().len()
        ),
        GameOutcome::Draw => println!("\nThe game is a draw after {} moves.", game.history().len()),
        GameOutcome::InProgress => println!("\nMatch stopped early."),
    }
    Ok(())
}

fn seat(player: Player) -> usize {
    usize::from(player.id() - 1)
}

fn print_turn(game: &Game, report: &TurnReport, names: &[String; 2]) {
    let name = &names[seat(report.player)];
    println!(
        "\nTurn {}: Player {} ({})",
        report.turn,
        report.player.id(),
        name
    );
    if let Some(reason) = &report.fallback {
        println!("Invalid move from {name} ({reason}); used a random valid move.");
    }
    match report.placement {
        Some((_, col)) => println!("{name} drops a piece in column {}", col + 1),
        None => println!("No valid moves available."),
    }
    if report.rotated {
        println!("Board rotated 90 degrees clockwise; pieces fell to the new floor.");
    }
    match game.moves_until_rotation() {
        Some(1) if !game.is_terminal() => println!("Board will rotate after the next move!"),
        Some(n) if n <= 3 && !game.is_terminal() => {
            println!("Board will rotate after {n} more moves.")
        }
        _ => {}
    }
}
