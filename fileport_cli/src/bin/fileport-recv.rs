//! Receive files over TCP into a directory, one connection at a time.
//!
//! The process exits on its own after the configured idle window with no
//! new connections, or when told to terminate (Ctrl-C, SIGTERM, SIGQUIT);
//! both paths are a success exit.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use fileport_core::{FileServer, TransferConfig};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fileport-recv")]
struct Args {
    /// TCP port to listen on (must be non-zero)
    server_port: u16,

    /// Directory where received files are stored; must already exist and
    /// be writable
    directory_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.server_port == 0 {
        bail!("invalid port number: 0");
    }

    // Console hint only; the server listens on all interfaces regardless.
    match local_ip_address::local_ip() {
        Ok(ip) => info!("Server IP: {}", ip),
        Err(e) => warn!("Unable to determine local IP address: {}", e),
    }

    let cancel = CancellationToken::new();
    spawn_signal_listener(cancel.clone());

    let server = FileServer::bind(
        args.server_port,
        args.directory_path,
        TransferConfig::default(),
        cancel,
    )
    .await?;

    server.run().await?;
    Ok(())
}

/// Translate termination signals into a cancellation the accept loop
/// observes between sessions, so the listening socket closes in order.
fn spawn_signal_listener(cancel: CancellationToken) {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut term = match signal(SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Unable to install SIGTERM handler: {}", e);
                    return;
                }
            };
            let mut quit = match signal(SignalKind::quit()) {
                Ok(s) => s,
                Err(e) => {
                    warn!("Unable to install SIGQUIT handler: {}", e);
                    return;
                }
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = term.recv() => {}
                _ = quit.recv() => {}
            }
        }

        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
        }

        cancel.cancel();
    });
}
