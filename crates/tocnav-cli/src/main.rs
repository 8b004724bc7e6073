use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tocnav_core::NavigatorConfig;

mod commands;
mod document;

#[derive(Parser)]
#[command(name = "tocnav")]
#[command(author, version, about = "Headless driver for the table-of-contents navigator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of ~/.config/tocnav/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Click links in a simulated document and print the scroll trace
    Simulate {
        /// Outline describing the document's sections
        outline: PathBuf,
        /// Link id to activate; repeat for several clicks
        #[arg(short = 'k', long = "click", required = true)]
        clicks: Vec<String>,
        /// Frames per second (defaults to scroll.animation_fps)
        #[arg(long)]
        fps: Option<u32>,
        /// Frames before the simulated layout reacts to a toggle
        #[arg(long, default_value_t = 2)]
        layout_lag: u32,
        /// Give up on a click after this many frames
        #[arg(long, default_value_t = 600)]
        max_frames: u32,
        /// Emit one JSON object per frame
        #[arg(long)]
        json: bool,
    },
    /// Show how a link id is classified
    Resolve {
        link: String,
    },
    /// Print the effective configuration
    Config {
        /// Write the configuration to the default path if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => NavigatorConfig::load_from(path)?,
        None => NavigatorConfig::load()?,
    };

    // Initialize logging; stdout is reserved for the trace
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Simulate {
            outline,
            clicks,
            fps,
            layout_lag,
            max_frames,
            json,
        } => {
            let options = commands::simulate::SimulateOptions {
                outline,
                clicks,
                fps,
                layout_lag,
                max_frames,
                json,
            };
            commands::simulate::run(&config, options).await
        }
        Commands::Resolve { link } => commands::resolve::run(&config, &link),
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
