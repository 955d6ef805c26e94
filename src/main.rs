use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override player 1's name
    #[arg(long)]
    player1_name: Option<String>,

    /// Override player 2's name
    #[arg(long)]
    player2_name: Option<String>,

    /// Override player 1's colour (name or #rrggbb)
    #[arg(long)]
    player1_color: Option<String>,

    /// Override player 2's colour (name or #rrggbb)
    #[arg(long)]
    player2_color: Option<String>,

    /// File that receives log output when RUST_LOG is set. Logs never go to
    /// the terminal, which the board occupies.
    #[arg(long, default_value = "connect_four.log")]
    log_file: PathBuf,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    if std::env::var_os("RUST_LOG").is_some() {
        init_logging(&cli.log_file)?;
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        config.game.height = height;
    }
    if let Some(width) = cli.width {
        config.game.width = width;
    }
    if let Some(name) = cli.player1_name {
        config.player1.name = name;
    }
    if let Some(name) = cli.player2_name {
        config.player2.name = name;
    }
    if let Some(color) = cli.player1_color {
        config.player1.color = color;
    }
    if let Some(color) = cli.player2_color {
        config.player2.color = color;
    }

    let mut app = App::new(config).context("invalid game settings")?;
    play(&mut app).context("terminal error")
}

/// Route `env_logger` output to `path` instead of stderr.
fn init_logging(path: &Path) -> Result<()> {
    let target = log_target(path)?;
    env_logger::Builder::from_default_env()
        .target(target)
        .try_init()
        .context("installing logger")
}

fn log_target(path: &Path) -> Result<env_logger::Target> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    Ok(env_logger::Target::Pipe(Box::new(file)))
}

fn play(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
