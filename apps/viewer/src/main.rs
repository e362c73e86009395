use anyhow::{Context, Result};
use clap::Parser;
use client_core::{CarouselController, CatalogClient};
use rand::{rngs::StdRng, SeedableRng};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod terminal;

use commands::{parse_command, Command};
use terminal::TerminalRenderer;

#[derive(Parser, Debug)]
#[command(about = "Browse the block carousel from a terminal")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server_url: String,
    /// Viewport width in pixels; each block fills one viewport.
    #[arg(long, default_value_t = 900.0)]
    viewport_width: f64,
    /// Fixed seed for the image draw.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let client = CatalogClient::new(&args.server_url)
        .with_context(|| format!("cannot use server url '{}'", args.server_url))?;
    let (events, mut changes) = broadcast::channel(16);
    let renderer = TerminalRenderer::new(std::io::stdout(), args.viewport_width);
    let mut controller = CarouselController::new(renderer, events);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    if let Err(error) = controller.load(&client, &mut rng).await {
        error!(
            %error,
            url = %client.blocks_url(),
            "block catalog unavailable; carousel stays empty"
        );
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match parse_command(&line) {
            Ok(Some(Command::Activate(class_name))) => {
                controller.activate(&class_name);
            }
            Ok(Some(Command::Resize(width))) => {
                controller.renderer_mut().set_viewport_width(width);
                controller.resize();
            }
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(error) => warn!(%error, "ignoring input"),
        }

        while let Ok(change) = changes.try_recv() {
            info!(?change, current_block = change.current_block(), "block changed");
        }
    }

    Ok(())
}
