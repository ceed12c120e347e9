use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use four_in_a_row::ai::RandomOpponent;
use four_in_a_row::config::AppConfig;
use four_in_a_row::logging;
use four_in_a_row::session::{GameMode, Session};
use four_in_a_row::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play four in a row on a 4x4 board.
#[derive(Parser)]
#[command(name = "four_in_a_row", about = "Four in a row on a 4x4 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Starting mode: human-vs-human or human-vs-ai
    #[arg(long)]
    mode: Option<GameMode>,

    /// Override the opponent's delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed the opponent for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(mode) = cli.mode {
        config.game.mode = mode;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.game.opponent_delay_ms = delay_ms;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file;
    }
    config.validate().context("invalid configuration")?;

    logging::init(&config.logging).context("setting up logging")?;

    let opponent = match config.game.seed {
        Some(seed) => RandomOpponent::seeded(seed),
        None => RandomOpponent::new(),
    };
    let session = Session::with_opponent(config.game.mode, Box::new(opponent));
    let mut app = App::new(session, config.game.opponent_delay());

    run(&mut app).context("running terminal UI")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
