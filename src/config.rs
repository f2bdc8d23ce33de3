//! Command-line and environment configuration.
//!
//! Every flag has an environment fallback, and `main` loads `.env.local`
//! (if present) before parsing, so local overrides can live in that file.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-api")]
#[command(about = "In-memory order management HTTP API", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "ORDER_API_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,

    /// JSON file with `orders` and `dishes` to preload
    #[arg(long, env = "ORDER_API_SEED")]
    pub seed: Option<PathBuf>,

    /// Capacity of the order actor's request channel
    #[arg(long, env = "ORDER_API_CHANNEL_CAPACITY", default_value_t = 32,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub channel_capacity: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "ORDER_API_LOG", default_value = "info")]
    pub log_level: String,
}
