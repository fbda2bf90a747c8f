use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::TransferConfig;
use crate::error::TransferError;
use crate::protocol::{ACK_CONNECTION, ACK_FILE_RECEIVED, send_ack};
use crate::receiver::receive_to_file;

/// Accepts connections one at a time and persists each stream as a file.
///
/// Connections are handled strictly in sequence; a second client connecting
/// during an active session waits in the listen backlog until the socket is
/// free. Artifacts are named `<directory>/<index>.file` from a counter that
/// starts at 1 and never repeats within one run, so names stay unique for
/// the lifetime of the server.
pub struct FileServer {
    listener: TcpListener,
    directory: PathBuf,
    config: TransferConfig,
    cancel: CancellationToken,
    connection_count: u64,
}

impl FileServer {
    /// Bind the listening socket. Fatal on failure.
    ///
    /// Cancelling `cancel` makes [`run`](Self::run) return between
    /// sessions; the binary wires termination signals to it.
    pub async fn bind(
        port: u16,
        directory: PathBuf,
        config: TransferConfig,
        cancel: CancellationToken,
    ) -> Result<Self, TransferError> {
        let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
        let listener = bind_listener(addr, config.backlog)
            .map_err(|source| TransferError::Bind { addr, source })?;

        if let Ok(local) = listener.local_addr() {
            info!("Listening on {}", local);
        }

        Ok(Self {
            listener,
            directory,
            config,
            cancel,
            connection_count: 0,
        })
    }

    /// Address the server actually listens on (useful when bound to port 0).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Drive the accept loop to completion.
    ///
    /// Waits up to `config.idle_timeout` for each connection; when the
    /// window elapses with none pending, shuts down gracefully with `Ok`.
    /// A failed `accept` is logged and retried. A receive error or a size
    /// violation aborts the loop with the underlying error, leaving any
    /// partial artifact on disk. Cancellation is observed between
    /// iterations and also returns `Ok`.
    pub async fn run(mut self) -> Result<(), TransferError> {
        loop {
            let accepted = tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("Termination signal received. Shutting down the server.");
                    return Ok(());
                }
                accepted = timeout(self.config.idle_timeout, self.listener.accept()) => accepted,
            };

            let (mut stream, peer) = match accepted {
                Err(_) => {
                    info!(
                        "No connections for {} seconds. Shutting down the server.",
                        self.config.idle_timeout.as_secs()
                    );
                    return Ok(());
                }
                Ok(Err(e)) => {
                    warn!("Unable to accept connection: {}", e);
                    continue;
                }
                Ok(Ok(pair)) => pair,
            };

            self.connection_count += 1;
            let index = self.connection_count;
            info!("Connection {} accepted from {}", index, peer);

            if let Err(e) = send_ack(&mut stream, ACK_CONNECTION).await {
                warn!("Unable to deliver ack to {}: {}", peer, e);
            }

            self.handle_session(&mut stream, index).await?;
            // Stream dropped here; the socket closes on every exit path.
        }
    }

    /// Run one transfer session to completion.
    async fn handle_session(
        &self,
        stream: &mut TcpStream,
        index: u64,
    ) -> Result<(), TransferError> {
        let path = artifact_path(&self.directory, index);
        let mut file =
            File::create(&path)
                .await
                .map_err(|source| TransferError::CreateArtifact {
                    path: path.clone(),
                    source,
                })?;

        let received = receive_to_file(stream, &mut file, &self.config).await?;
        info!(
            "File received successfully: {} ({} bytes)",
            path.display(),
            received
        );

        if let Err(e) = send_ack(stream, ACK_FILE_RECEIVED).await {
            warn!("Unable to deliver ack: {}", e);
        }

        Ok(())
    }
}

fn artifact_path(directory: &Path, index: u64) -> PathBuf {
    directory.join(format!("{index}.file"))
}

/// Bind with an explicit listen backlog, which `TcpListener::bind` does not
/// expose.
fn bind_listener(addr: SocketAddr, backlog: u32) -> std::io::Result<TcpListener> {
    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4()?,
        SocketAddr::V6(_) => TcpSocket::new_v6()?,
    };
    socket.bind(addr)?;
    socket.listen(backlog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_names_follow_connection_index() {
        let dir = Path::new("/srv/incoming");
        assert_eq!(artifact_path(dir, 1), PathBuf::from("/srv/incoming/1.file"));
        assert_eq!(
            artifact_path(dir, 42),
            PathBuf::from("/srv/incoming/42.file")
        );
    }
}
