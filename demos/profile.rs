//! Fetches a player's public data and the daily puzzle.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example profile --features tracing
//! ```

use chesscom_client_sdk::types::request::PlayerRequest;
use chesscom_client_sdk::{Client, Config};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::builder()
        .user_agent("chesscom-client-sdk example. Contact maintainers via the repository")
        .build();
    let client = Client::new("https://api.chess.com/pub", config)?;

    let request = PlayerRequest::builder().username("fabianocaruana").build();

    match client.player_profile(&request).await {
        Ok(profile) => info!(
            endpoint = "player_profile",
            name = %profile["name"],
            followers = %profile["followers"]
        ),
        Err(e) => debug!(endpoint = "player_profile", error = %e),
    }

    match client.player_stats(&request).await {
        Ok(stats) => info!(
            endpoint = "player_stats",
            blitz = %stats["chess_blitz"]["last"]["rating"]
        ),
        Err(e) => debug!(endpoint = "player_stats", error = %e),
    }

    match client.daily_puzzle().await {
        Ok(puzzle) => info!(endpoint = "daily_puzzle", title = %puzzle["title"]),
        Err(e) => debug!(endpoint = "daily_puzzle", error = %e),
    }

    Ok(())
}
