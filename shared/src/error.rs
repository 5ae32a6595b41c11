//! Wire-level error conditions.

use thiserror::Error;

/// Failure while decoding a message off the reliable channel.
///
/// Every variant means the whole message must be discarded; partial updates
/// are never applied to a replica's received target.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// A set flag promised a payload the buffer does not contain, a reserved
    /// flag bit was set, or bytes were left over after the last payload.
    /// Sender and receiver disagree about the stream layout.
    #[error("protocol desync: {0}")]
    ProtocolDesync(&'static str),

    /// A one-shot command carried a tag this build does not know.
    #[error("unknown command tag {0:#04x}")]
    UnknownCommand(u8),
}
