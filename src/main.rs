use anyhow::{Context, Result};
use appgrid::app::{App, AppEvent};
use appgrid::feed::{self, FeedSource, DEFAULT_LIMIT, DEFAULT_REGION};
use appgrid::ui;
use clap::Parser;
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "appgrid", about = "Top free iOS apps in a filterable text grid")]
struct Args {
    /// App Store region code (e.g. kr, us, jp)
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Number of ranking entries to request (1-200)
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let source = FeedSource::new(&args.region, args.limit).context("Invalid feed source")?;
    let url = source.url().context("Failed to build feed URL")?;
    tracing::info!(url = %url, "Loading feed");

    // One writer (the loader task), one reader (the UI loop).
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(4);

    let client = reqwest::Client::new();
    feed::load_in_background(client, url, event_tx);

    // Type a line to filter by name, an empty line to clear, Ctrl-D to quit.
    let mut app = App::new();
    ui::run(&mut app, event_rx).await?;

    Ok(())
}
