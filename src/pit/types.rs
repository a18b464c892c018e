//! Core value types shared by the pixel iterator.

use crate::descriptor::ImageDesc;

/// A 2-D integer coordinate.
///
/// The source distinguishes a signed `Point2D` (used by the line iterator,
/// which can transiently overshoot image bounds while stepping) from an
/// unsigned `IPoint2D` (in-bounds pixel addresses). Both collapse to this
/// one type here; nothing in this crate needs a coordinate outside `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A precomputed cache-block/bit address step, replayable without redoing
/// the bit arithmetic in [`crate::pit::PixIter::moveto`].
///
/// Supplements the `BGPIAddrDelta*` struct family declared (but never
/// defined) in the source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddrDelta {
    pub cblk: i64,
    pub bit: i32,
}

/// A cursor bound to one image buffer, caching one or two adjacent
/// "cache blocks" of raw bytes so that sub-byte-aligned pixel formats can be
/// read and written without a read-modify-write round trip to the backing
/// buffer on every access.
pub struct PixIter<'buf> {
    pub(crate) buf: &'buf mut [u8],
    pub(crate) desc: ImageDesc,

    pub(crate) pos: Point,

    /// Byte offset of the start of the cached block(s) within `buf`.
    pub(crate) cblk_addr: u32,
    /// Bit offset of the current pixel within the cached block(s).
    pub(crate) bit_addr: u32,

    /// Up to two cache blocks, back to back.
    pub(crate) cache: [u8; 16],
    pub(crate) valid0: bool,
    pub(crate) dirty0: bool,
    pub(crate) valid1: bool,
    pub(crate) dirty1: bool,

    /// Total cached byte span (both blocks combined if `twoblk`).
    pub(crate) cache_sz: u8,
    /// Byte span of a single cache block (`cache_sz / 2` if `twoblk`, else
    /// equal to `cache_sz`).
    pub(crate) cache_bsz: u8,
    pub(crate) cache_sz_log2: u8,
    pub(crate) cache_bsz_log2: u8,

    /// True when every pixel is byte-aligned and a whole multiple of
    /// `cache_bsz` bytes wide, so the cache can be bypassed entirely.
    pub(crate) uncached: bool,
    pub(crate) twoblk: bool,

    // Precomputed byte/bit deltas, see `bind.rs` for the exact derivation.
    pub(crate) pitch_cblks: u32,
    pub(crate) pitch_cbits: u32,
    pub(crate) bpp_cblks: u8,
    pub(crate) bpp_cbits: u32,
    pub(crate) pitch_pad_cblks: u32,
    pub(crate) pitch_pad_cbits: u32,
}

impl<'buf> PixIter<'buf> {
    pub fn desc(&self) -> &ImageDesc {
        &self.desc
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn is_uncached(&self) -> bool {
        self.uncached
    }

    pub fn is_twoblk(&self) -> bool {
        self.twoblk
    }
}
