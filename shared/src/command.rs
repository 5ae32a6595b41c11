//! One-shot broadcast commands.
//!
//! These ride the same reliable, ordered channel as the state-sync stream
//! but are a separate message kind: fire-and-forget effect toggles, not
//! continuous state. Tags are part of the wire format; do not reorder or
//! reuse values.

use crate::error::WireError;

/// A broadcast effect command from the authority to every replica.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectCommand {
    /// Light the entity's on-fire effect.
    FireEffectOn = 1,
    /// Extinguish the entity's on-fire effect.
    FireEffectOff = 2,
}

impl EffectCommand {
    /// Single-byte wire encoding.
    #[inline]
    pub fn encode(self) -> [u8; 1] {
        [self as u8]
    }

    /// Decode a command message. The message must be exactly one known tag.
    pub fn decode(bytes: &[u8]) -> Result<Self, WireError> {
        let [tag] = bytes else {
            return Err(WireError::ProtocolDesync("command must be a single byte"));
        };
        match tag {
            1 => Ok(EffectCommand::FireEffectOn),
            2 => Ok(EffectCommand::FireEffectOff),
            other => Err(WireError::UnknownCommand(*other)),
        }
    }
}
