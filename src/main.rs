use anyhow::Result;
use clap::{Parser, ValueEnum};
use matrix_snake::game::GameConfig;
use matrix_snake::modes::PlayMode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matrix_snake")]
#[command(version, about = "Snake for an 8x8 scanned LED matrix")]
struct Cli {
    /// Run mode (currently only 'play' is implemented)
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Milliseconds per physics tick
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// Seed for fruit placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal against the simulated panel
    Play,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stdout and stay off unless RUST_LOG asks for them;
    // the interface itself renders on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .init();

    // Create game configuration from CLI arguments
    let config = GameConfig::new(cli.tick_ms);

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config, cli.seed);
            play_mode.run().await?;
        }
    }

    Ok(())
}
