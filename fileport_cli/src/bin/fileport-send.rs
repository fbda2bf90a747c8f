//! Stream one local file to a fileport receiver (one file per connection).

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fileport_core::{TransferConfig, send_file};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fileport-send")]
struct Args {
    /// IP address of the receiver
    server_ip: IpAddr,

    /// TCP port the receiver listens on
    server_port: u16,

    /// Path of the file to send
    file_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let addr = SocketAddr::new(args.server_ip, args.server_port);

    send_file(addr, &args.file_path, &TransferConfig::default())
        .await
        .with_context(|| format!("failed to send {}", args.file_path.display()))?;

    Ok(())
}
