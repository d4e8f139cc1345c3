//! Rendering proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────────────┐
//!                      │                     RENDER PROXY                         │
//!   Client Request     │  ┌─────────┐    ┌──────────┐    ┌──────────┐             │
//!   ───────────────────┼─▶│  http   │───▶│ routing  │───▶│ upstream │─────────────┼──▶ Data API /
//!                      │  │ server  │    │  route + │    │  client  │◀────────────┼─── Asset host
//!                      │  └─────────┘    │  assets  │    └────┬─────┘             │
//!                      │                 └──────────┘         ▼                   │
//!   Client Response    │  ┌─────────┐    ┌──────────┐    ┌──────────┐             │
//!   ◀──────────────────┼──│response │◀───│  render  │◀───│ classify │             │
//!                      │  └─────────┘    └──────────┘    └──────────┘             │
//!                      │        ▲                                                 │
//!                      │        └──── failure (any stage → error document)        │
//!                      └──────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;

use render_proxy::lifecycle::{startup, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    startup::run(cli).await?;
    Ok(())
}
