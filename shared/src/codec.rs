/*!
Delta field codec for the continuous state-sync stream.

Wire layout of one message (all scalars little-endian `f32`):

```text
[flags: u8]
[position: 3 x f32]   present iff flags.position
[rotation: 4 x f32]   present iff flags.rotation  (i, j, k, w)
[move:     2 x f32]   present iff flags.move
[look:     2 x f32]   present iff flags.look
```

A clear flag contributes zero payload bytes; absence on the wire means
"unchanged", never "zero". Decoding is strictly sequential and produces a
complete [`SyncUpdate`] value before anything is applied, so a failure can
never leave a receiver half-mutated.
*/

use crate::error::WireError;
use crate::flags::ChangeFlags;
use crate::types::{EntityTransform, InputSample, Quat, Vec2, Vec3};
use nalgebra as na;

/// A decoded sparse update. `None` fields were absent from the message and
/// must retain whatever value the receiver last held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SyncUpdate {
    pub position: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub move_input: Option<Vec2>,
    pub look: Option<Vec2>,
}

impl SyncUpdate {
    /// The flags this update would carry on the wire.
    pub fn flags(&self) -> ChangeFlags {
        ChangeFlags {
            position: self.position.is_some(),
            rotation: self.rotation.is_some(),
            move_input: self.move_input.is_some(),
            look: self.look.is_some(),
        }
    }
}

/// Encode exactly the fields selected by `flags`, reading current values
/// from the authority's transform and input sample.
pub fn encode(flags: ChangeFlags, transform: &EntityTransform, input: &InputSample) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + encoded_payload_len(flags));
    out.push(flags.to_bits());

    if flags.position {
        put_vec3(&mut out, &transform.translation);
    }
    if flags.rotation {
        put_quat(&mut out, &transform.rotation);
    }
    if flags.move_input {
        put_vec2(&mut out, &input.move_input);
    }
    if flags.look {
        put_vec2(&mut out, &input.look);
    }
    out
}

/// Decode one message. Any violation of the layout is a
/// [`WireError::ProtocolDesync`] and the caller must drop the whole message.
pub fn decode(bytes: &[u8]) -> Result<SyncUpdate, WireError> {
    let mut inp = bytes;
    let flags_byte = take::<1>(&mut inp)
        .ok_or(WireError::ProtocolDesync("missing flags byte"))?[0];
    let flags = ChangeFlags::from_bits(flags_byte)
        .ok_or(WireError::ProtocolDesync("reserved flag bits set"))?;

    let mut update = SyncUpdate::default();
    if flags.position {
        update.position = Some(
            get_vec3(&mut inp).ok_or(WireError::ProtocolDesync("truncated position payload"))?,
        );
    }
    if flags.rotation {
        update.rotation = Some(get_quat(&mut inp)?);
    }
    if flags.move_input {
        update.move_input =
            Some(get_vec2(&mut inp).ok_or(WireError::ProtocolDesync("truncated move payload"))?);
    }
    if flags.look {
        update.look =
            Some(get_vec2(&mut inp).ok_or(WireError::ProtocolDesync("truncated look payload"))?);
    }

    if !inp.is_empty() {
        return Err(WireError::ProtocolDesync("trailing bytes after payload"));
    }
    Ok(update)
}

/// Payload size (excluding the flags byte) implied by a set of flags.
pub fn encoded_payload_len(flags: ChangeFlags) -> usize {
    let mut len = 0;
    if flags.position {
        len += 3 * 4;
    }
    if flags.rotation {
        len += 4 * 4;
    }
    if flags.move_input {
        len += 2 * 4;
    }
    if flags.look {
        len += 2 * 4;
    }
    len
}

fn take<'a, const N: usize>(inp: &mut &'a [u8]) -> Option<[u8; N]> {
    if inp.len() < N {
        return None;
    }
    let (head, rest) = inp.split_at(N);
    *inp = rest;
    let mut buf = [0u8; N];
    buf.copy_from_slice(head);
    Some(buf)
}

fn put_f32(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&v.to_le_bytes());
}

fn get_f32(inp: &mut &[u8]) -> Option<f32> {
    take::<4>(inp).map(f32::from_le_bytes)
}

fn put_vec2(out: &mut Vec<u8>, v: &Vec2) {
    put_f32(out, v.x);
    put_f32(out, v.y);
}

fn get_vec2(inp: &mut &[u8]) -> Option<Vec2> {
    Some(Vec2::new(get_f32(inp)?, get_f32(inp)?))
}

fn put_vec3(out: &mut Vec<u8>, v: &Vec3) {
    put_f32(out, v.x);
    put_f32(out, v.y);
    put_f32(out, v.z);
}

fn get_vec3(inp: &mut &[u8]) -> Option<Vec3> {
    Some(Vec3::new(get_f32(inp)?, get_f32(inp)?, get_f32(inp)?))
}

fn put_quat(out: &mut Vec<u8>, q: &Quat) {
    let c = q.coords; // (i, j, k, w)
    put_f32(out, c.x);
    put_f32(out, c.y);
    put_f32(out, c.z);
    put_f32(out, c.w);
}

fn get_quat(inp: &mut &[u8]) -> Result<Quat, WireError> {
    let i = get_f32(inp);
    let j = get_f32(inp);
    let k = get_f32(inp);
    let w = get_f32(inp);
    let (Some(i), Some(j), Some(k), Some(w)) = (i, j, k, w) else {
        return Err(WireError::ProtocolDesync("truncated rotation payload"));
    };
    let raw = na::Quaternion::new(w, i, j, k);
    // Renormalize against accumulated float drift; a degenerate quaternion
    // cannot be interpreted as a rotation at all.
    if !raw.norm().is_normal() {
        return Err(WireError::ProtocolDesync("degenerate rotation payload"));
    }
    Ok(na::UnitQuaternion::new_normalize(raw))
}
