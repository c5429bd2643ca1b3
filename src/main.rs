use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

use forage::api::{self, AppState};
use forage::config::Config;

/// Search context relay: POST a query, get back the readable text of the
/// top results.
#[derive(Parser, Debug)]
#[command(name = "forage")]
struct Args {
    /// Address to listen on (overrides LISTEN_ADDR)
    #[arg(long)]
    listen: Option<String>,
    /// Search backend base URL (overrides SEARCH_URL)
    #[arg(long)]
    search_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }
    if let Some(search_url) = args.search_url {
        config.search_url = search_url;
    }

    let state = AppState::new(Arc::new(config))?;
    let app = api::create_router(state.clone());

    let listener = TcpListener::bind(&state.config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
