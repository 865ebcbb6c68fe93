//! Bit layout of a packed tile key.
//!
//! ```text
//! | zoom (6) | x (29) | y (29) |
//! 63      58 57    29 28     0
//! ```
//!
//! Every tile up to [`MAX_ZOOM`] fits its fields exactly, so the packing is
//! injective over valid tiles. Bit 63 is never set by a valid zoom.

pub const ZOOM_BITS: u32 = 6;
pub const COORD_BITS: u32 = 29;

pub const Y_SHIFT: u32 = 0;
pub const X_SHIFT: u32 = COORD_BITS;
pub const ZOOM_SHIFT: u32 = COORD_BITS * 2;

pub const ZOOM_MASK: u64 = (1 << ZOOM_BITS) - 1;
pub const COORD_MASK: u64 = (1 << COORD_BITS) - 1;

/// Deepest zoom level whose tiles fit the coordinate fields.
pub const MAX_ZOOM: u8 = COORD_BITS as u8;

/// Packs the raw fields. Bits outside each field's width are dropped.
pub fn pack(z: u8, x: u32, y: u32) -> u64 {
    ((z as u64 & ZOOM_MASK) << ZOOM_SHIFT)
        | ((x as u64 & COORD_MASK) << X_SHIFT)
        | ((y as u64 & COORD_MASK) << Y_SHIFT)
}

pub fn unpack(key: u64) -> (u8, u32, u32) {
    let z = ((key >> ZOOM_SHIFT) & ZOOM_MASK) as u8;
    let x = ((key >> X_SHIFT) & COORD_MASK) as u32;
    let y = ((key >> Y_SHIFT) & COORD_MASK) as u32;
    (z, x, y)
}
