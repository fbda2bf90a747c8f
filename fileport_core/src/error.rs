use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by transfer sessions and the server loop.
///
/// Everything here is fatal to the process except where the server loop
/// explicitly tolerates it (a failed `accept` is logged and retried).
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("unable to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("unable to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("unable to open {}: {source}", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to create {}: {source}", path.display())]
    CreateArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read or write failed mid-session. The partial artifact stays on
    /// disk, untruncated.
    #[error("transfer failed: {0}")]
    Io(#[from] io::Error),

    /// The stream ended cleanly but delivered more bytes than allowed.
    /// The oversized artifact stays on disk.
    #[error("received file is {size} bytes, exceeding the {limit} byte maximum")]
    FileTooLarge { size: u64, limit: u64 },
}
