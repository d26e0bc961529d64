//! Mood-match server binary.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```
//!
//! Set `GEMINI_API_KEY` to back `/ai/talk` and `/ai/status` with Gemini;
//! without it a static fallback table answers.

use std::sync::Arc;

use clap::Parser;
use moodmatch::{
    broker::RoomBroker,
    common::logger::setup_logger,
    infrastructure::{reply::reply_generator_from_env, store::InMemoryMoodStore},
    ui::{AppState, run_server},
};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Mood-based matchmaking and chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Wire dependencies: broker, store, reply generator, then the server.
    let state = Arc::new(AppState {
        broker: Arc::new(RoomBroker::new()),
        store: Arc::new(InMemoryMoodStore::new()),
        replies: reply_generator_from_env(),
    });

    if let Err(e) = run_server(state, args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
