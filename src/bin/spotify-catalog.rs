use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use spotify_catalog::config;
use spotify_catalog::models::SearchType;
use spotify_catalog::utils::logging::{self, LogLevel};
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "spotify-catalog.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog
    Search {
        query: String,
        #[arg(long = "type", value_delimiter = ',', default_value = "track")]
        types: Vec<SearchType>,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    Track { id: String },
    Album { id: String },
    Artist { id: String },
    Playlist { id: String },
    /// Compare a playlist against a previously seen etag
    PlaylistChanged {
        id: String,
        #[arg(long)]
        etag: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let client_config = config::file_to_config(Path::new(&args.config))
        .await
        .with_context(|| format!("invalid config '{}'", args.config))?;

    logging::init_logging(&logging::resolve(Some(&client_config), args.log_level));

    // -------------------------------
    // 2. Build client
    // -------------------------------

    let client = client_config.into_client()?;
    info!(market = ?client.market(), "client ready");

    // -------------------------------
    // 3. Run command
    // -------------------------------

    match args.command {
        Command::Search { query, types, limit, offset } => {
            print_json(&client.search(&query, &types, limit, offset).await?)
        }
        Command::Track { id } => print_json(&client.get_track(&id).await?),
        Command::Album { id } => print_json(&client.get_album(&id).await?),
        Command::Artist { id } => print_json(&client.get_artist(&id).await?),
        Command::Playlist { id } => print_json(&client.get_playlist(&id).await?),
        Command::PlaylistChanged { id, etag } => {
            let version = client.has_playlist_changed(&id, etag.as_deref()).await?;
            info!(changed = version.has_changed(), etag = ?version.etag, "playlist checked");
            print_json(&version)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{}", out);
    Ok(())
}
