use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::TransferConfig;
use crate::error::TransferError;

/// Drain one connection into an output file.
///
/// Chunks are written in the exact order and at the exact byte boundaries
/// they arrive; chunk boundaries are not part of the stored artifact. The
/// loop ends on the peer's zero-length read (clean EOF). After the stream
/// ends the total size is checked against `config.max_file_size`; an
/// oversized or partially written artifact is left on disk either way.
pub async fn receive_to_file(
    stream: &mut TcpStream,
    file: &mut File,
    config: &TransferConfig,
) -> Result<u64, TransferError> {
    let mut buffer = vec![0u8; config.chunk_size];
    let mut received: u64 = 0;

    loop {
        let n = stream.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        file.write_all(&buffer[..n]).await?;
        received += n as u64;
    }

    file.flush().await?;

    if received > config.max_file_size {
        return Err(TransferError::FileTooLarge {
            size: received,
            limit: config.max_file_size,
        });
    }

    Ok(received)
}
