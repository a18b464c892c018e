//! Binding a [`PixIter`] to a buffer and deriving its cache-stepping
//! constants.

use super::types::{AddrDelta, Point, PixIter};
use crate::descriptor::ImageDesc;

/// Largest `cache_sz_log2` the cache may be bound with (`cache_sz` up to 8
/// bytes — one cache block of tail padding is all callers are asked for).
const MAX_CACHE_SZ_LOG2: u8 = 3;

/// Binds a cursor to `buf` for the image described by `desc`.
///
/// `cache_sz_log2` selects the cache span as `1 << cache_sz_log2` bytes
/// (clamped to what the cache storage can hold); `twoblk` requests
/// two-block mode, where the cache is split into two adjacent aligned
/// blocks that can be shifted independently as the cursor crosses a block
/// boundary (see `cache.rs`).
pub fn bind<'buf>(
    buf: &'buf mut [u8],
    desc: &ImageDesc,
    cache_sz_log2: u8,
    twoblk: bool,
) -> PixIter<'buf> {
    let cache_sz_log2 = cache_sz_log2.min(MAX_CACHE_SZ_LOG2);
    let cache_sz: u8 = 1u8 << cache_sz_log2;

    let cache_bsz: u8 = if twoblk { cache_sz / 2 } else { cache_sz };
    // Open Question #3: underflows bit-for-bit like the source's unsigned
    // subtraction when `cache_sz_log2 == 0` and `twoblk` is requested.
    let cache_bsz_log2: u8 = if twoblk {
        cache_sz_log2.wrapping_sub(1)
    } else {
        cache_sz_log2
    };

    let pitch = desc.pitch;
    let pitch_bits = desc.pitch_bits as u32;
    let bpp = desc.bpp;
    let cache_bsz32 = cache_bsz as u32;

    let pitch_cblks = pitch & !(cache_bsz32.wrapping_sub(1));
    // Mirrors the source literally: masked against `cache_bsz - 1`, a
    // byte-sized window, not `(cache_bsz << 3) - 1`. See DESIGN.md.
    let pitch_cbits = ((pitch << 3) + pitch_bits) & cache_bsz32.wrapping_sub(1);

    let bpp_cblks: u8 = ((bpp >> 3) as u32 & !(cache_bsz32.wrapping_sub(1))) as u8;
    let bpp_cbits: u32 = bpp as u32 & ((cache_bsz32 << 3).wrapping_sub(1));

    let row_pad_bits = ((pitch << 3) + pitch_bits) - bpp as u32 * desc.width as u32;
    let pitch_pad_cblks = (row_pad_bits >> 3) & !(cache_bsz32.wrapping_sub(1));
    let pitch_pad_cbits = row_pad_bits & ((cache_bsz32 << 3).wrapping_sub(1));

    let uncached = bpp & 7 == 0 && ((bpp >> 3) as u32) & cache_bsz32.wrapping_sub(1) == 0;
    let twoblk = twoblk && !uncached;

    let mut pit = PixIter {
        buf,
        desc: *desc,
        pos: Point::new(0, 0),
        cblk_addr: 0,
        bit_addr: 0,
        cache: [0u8; 16],
        valid0: false,
        dirty0: false,
        valid1: false,
        dirty1: false,
        cache_sz,
        cache_bsz,
        cache_sz_log2,
        cache_bsz_log2,
        uncached,
        twoblk,
        pitch_cblks,
        pitch_cbits,
        bpp_cblks,
        bpp_cbits,
        pitch_pad_cblks,
        pitch_pad_cbits,
    };
    debug_assert_invariants(&pit);
    super::movement::moveto(&mut pit, Point::new(0, 0));
    pit
}

/// INV-1/INV-2 from the data model: the cache address stays block-aligned
/// and the bit offset stays inside one cache block's bit span.
pub(crate) fn debug_assert_invariants(pit: &PixIter) {
    debug_assert_eq!(pit.cblk_addr % pit.cache_bsz as u32, 0);
    debug_assert!((pit.bit_addr as u64) < (pit.cache_sz as u64) * 8);
}

impl<'buf> PixIter<'buf> {
    /// Precomputes a replayable `(dx, dy)` step, built from the same
    /// cache-block/bit-carry arithmetic as [`moveto`](super::movement::moveto).
    pub fn compute_delta(&self, dx: i32, dy: i32) -> AddrDelta {
        let mut cblk = dy as i64 * self.pitch_cblks as i64 + dx as i64 * self.bpp_cblks as i64;
        let mut bit = dx * self.bpp_cbits as i32;
        if self.desc.pitch_bits > 0 {
            bit += dy * self.pitch_cbits as i32;
        }
        let block_bits = (self.cache_bsz as i32) * 8;
        cblk += (bit.div_euclid(block_bits)) as i64 * self.cache_bsz as i64;
        bit = bit.rem_euclid(block_bits);
        AddrDelta { cblk, bit }
    }
}
