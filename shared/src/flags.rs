//! Per-field change flags and their packed wire representation.
//!
//! The flags byte is the first byte of every state-sync message; the
//! payload layout behind it is owned by [`crate::codec`].

/// The four sync fields, in wire order. The discriminant is the bit index
/// inside the packed flags byte; treat it as part of the wire format.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncField {
    Position = 0,
    Rotation = 1,
    Move = 2,
    Look = 3,
}

impl SyncField {
    /// All fields in the fixed wire order {position, rotation, move, look}.
    pub const WIRE_ORDER: [SyncField; 4] = [
        SyncField::Position,
        SyncField::Rotation,
        SyncField::Move,
        SyncField::Look,
    ];

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bits 4..=7 of the flags byte are reserved and must be zero on the wire.
pub const RESERVED_FLAG_BITS: u8 = 0xF0;

/// Which fields changed enough to transmit this tick.
///
/// Computed fresh every send tick against the authority's own last-sent
/// snapshot, never against anything a replica holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChangeFlags {
    pub position: bool,
    pub rotation: bool,
    pub move_input: bool,
    pub look: bool,
}

impl ChangeFlags {
    /// No field changed.
    pub const NONE: ChangeFlags = ChangeFlags {
        position: false,
        rotation: false,
        move_input: false,
        look: false,
    };

    /// Every field changed. Used for the initial full snapshot after spawn.
    pub const ALL: ChangeFlags = ChangeFlags {
        position: true,
        rotation: true,
        move_input: true,
        look: true,
    };

    #[inline]
    pub fn contains(&self, field: SyncField) -> bool {
        match field {
            SyncField::Position => self.position,
            SyncField::Rotation => self.rotation,
            SyncField::Move => self.move_input,
            SyncField::Look => self.look,
        }
    }

    /// Is there anything worth transmitting at all?
    #[inline]
    pub fn any(&self) -> bool {
        self.position || self.rotation || self.move_input || self.look
    }

    /// Pack into the wire flags byte (bits 0..=3, reserved bits zero).
    pub fn to_bits(self) -> u8 {
        SyncField::WIRE_ORDER
            .iter()
            .fold(0u8, |bits, &f| match self.contains(f) {
                true => bits | f.mask(),
                false => bits,
            })
    }

    /// Unpack a wire flags byte. Returns `None` if any reserved bit is set,
    /// which callers must treat as a protocol desync.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & RESERVED_FLAG_BITS != 0 {
            return None;
        }
        Some(ChangeFlags {
            position: bits & SyncField::Position.mask() != 0,
            rotation: bits & SyncField::Rotation.mask() != 0,
            move_input: bits & SyncField::Move.mask() != 0,
            look: bits & SyncField::Look.mask() != 0,
        })
    }
}
