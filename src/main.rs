use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tick_snake::game::{GameConfig, GameState};
use tick_snake::modes::HumanMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tick_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// JSON file with a game configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Initial snake length
    #[arg(long)]
    snake_length: Option<usize>,

    /// Frames per move at the start of a game
    #[arg(long)]
    base_speed: Option<u32>,

    /// Fewest frames per move the game speeds up to
    #[arg(long)]
    min_speed: Option<u32>,

    /// Speed up after every N food eaten
    #[arg(long)]
    speed_up_every: Option<u32>,

    /// Frames per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Seed for food placement, for repeatable games
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then individual flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(length) = self.snake_length {
            config.initial_snake_length = length;
        }
        if let Some(speed) = self.base_speed {
            config.base_tick_speed = speed;
        }
        if let Some(speed) = self.min_speed {
            config.min_tick_speed = speed;
        }
        if let Some(every) = self.speed_up_every {
            config.speed_up_every = every;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open config file {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config()?;
    tracing::info!(?config, seed = ?cli.seed, fps = cli.fps, "configuration loaded");

    let state = match cli.seed {
        Some(seed) => GameState::seeded(config, seed)?,
        None => GameState::new(config)?,
    };

    let mut human_mode = HumanMode::new(state, cli.fps);
    human_mode.run().await?;

    Ok(())
}
