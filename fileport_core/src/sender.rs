use std::net::SocketAddr;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::info;

use crate::config::TransferConfig;
use crate::error::TransferError;

/// Stream one local file to the receiver at `addr`.
///
/// The file is read from offset 0 to EOF in `config.chunk_size` units and
/// each chunk is written to the connection in full before the next read.
/// No framing is added; closing the write side is the end-of-file signal.
/// The receiver's acknowledgments are intentionally not read.
///
/// Returns the number of bytes sent. Every failure (file not openable,
/// connect refused, a failed send) is returned as an error with nothing
/// retried.
pub async fn send_file(
    addr: SocketAddr,
    path: &Path,
    config: &TransferConfig,
) -> Result<u64, TransferError> {
    let mut file = File::open(path)
        .await
        .map_err(|source| TransferError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
    let file_size = file.metadata().await?.len();

    let mut stream = TcpStream::connect(addr)
        .await
        .map_err(|source| TransferError::Connect { addr, source })?;

    info!(
        "Sending file: {} ({} bytes) to {}",
        path.display(),
        file_size,
        addr
    );

    let mut buffer = vec![0u8; config.chunk_size];
    let mut sent: u64 = 0;
    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&buffer[..n]).await?;
        sent += n as u64;
    }

    // Flush and close the write side; the receiver reads until EOF.
    stream.shutdown().await?;

    info!("File sent successfully: {} ({} bytes)", path.display(), sent);
    Ok(sent)
}
