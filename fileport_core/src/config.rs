use std::time::Duration;

/// Tunable limits shared by the sender and the receiver.
///
/// Both session constructors take this by reference instead of reading
/// hard-coded constants, so tests can exercise the guard paths with small
/// values (e.g. a 10-byte cap) without generating large fixtures.
#[derive(Debug, Clone)]
pub struct TransferConfig {
    /// Read/write unit for both sides of the stream. Default 1024 bytes.
    pub chunk_size: usize,
    /// Largest file the receiver accepts. Default 100 MiB.
    pub max_file_size: u64,
    /// How long the receiver waits for a new connection before shutting
    /// down voluntarily. Default 30 seconds.
    pub idle_timeout: Duration,
    /// Listen backlog. A second client connecting during an active session
    /// waits here until the socket is free. Default 1.
    pub backlog: u32,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            max_file_size: 100 * 1024 * 1024,
            idle_timeout: Duration::from_secs(30),
            backlog: 1,
        }
    }
}
