//! Point-to-point TCP file transfer.
//!
//! A sender streams one local file over a single TCP connection; a receiver
//! accepts connections one at a time, persists each stream under an
//! auto-generated name, and shuts itself down after an idle period.
//!
//! There is no framing on the wire: the end of the sender's stream is the
//! end of the file. The receiver answers with two fixed acknowledgment
//! messages that the stock sender deliberately ignores.

pub mod config;
pub mod error;
pub mod protocol;
pub mod receiver;
pub mod sender;
pub mod server;

pub use config::TransferConfig;
pub use error::TransferError;
pub use sender::send_file;
pub use server::FileServer;
