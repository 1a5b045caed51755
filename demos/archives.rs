//! Streams every monthly game archive of a player.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example archives --features tracing
//! ```

use chesscom_client_sdk::types::request::PlayerRequest;
use chesscom_client_sdk::{Client, Config};
use futures::StreamExt as _;
use tokio::pin;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::builder()
        .user_agent("chesscom-client-sdk example. Contact maintainers via the repository")
        .build();
    let client = Client::new("https://api.chess.com/pub", config)?;

    let request = PlayerRequest::builder().username("erik").build();
    let stream = client.stream_monthly_archives(&request);
    pin!(stream);

    let mut total = 0_usize;
    while let Some(result) = stream.next().await {
        match result {
            Ok(month) => {
                let games = month["games"].as_array().map_or(0, Vec::len);
                total += games;
                info!(games, total, "fetched archive");
            }
            Err(e) => warn!(error = %e, "archive fetch failed"),
        }
    }

    info!(total, "done");

    Ok(())
}
