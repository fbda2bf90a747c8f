//! The (one-sided) wire protocol.
//!
//! File bytes travel as a raw TCP stream with no header, length prefix, or
//! checksum; the sender closing its write side is the only end-of-file
//! signal. The receiver writes two fixed textual acknowledgments back, which
//! the stock sender never reads.

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Sent by the receiver immediately after accepting a connection.
pub const ACK_CONNECTION: &[u8] = b"ACK Connection established";

/// Sent by the receiver once the file is fully received and flushed.
pub const ACK_FILE_RECEIVED: &[u8] = b"ACK File received successfully";

/// Write one acknowledgment to the peer. Delivery is best-effort: the peer
/// may already have closed its end without ever reading.
pub async fn send_ack(stream: &mut TcpStream, ack: &[u8]) -> std::io::Result<()> {
    stream.write_all(ack).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_texts_are_fixed() {
        assert_eq!(ACK_CONNECTION, b"ACK Connection established");
        assert_eq!(ACK_FILE_RECEIVED, b"ACK File received successfully");
    }
}
