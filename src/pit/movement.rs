//! Cursor movement: absolute seeks, single-pixel steps, and scanline hops.
//!
//! Every operation here is expressed in terms of [`moveto`], which
//! recomputes the cache-block/bit address from scratch using the
//! precomputed deltas from `bind.rs`. This keeps every movement operation
//! correct by construction rather than duplicating the carry arithmetic
//! per direction; callers who need a replayable fixed step without a full
//! recomputation can use [`PixIter::compute_delta`] /
//! [`PixIter::advance_by`] instead.

use super::bind::debug_assert_invariants;
use super::types::{AddrDelta, Point, PixIter};

/// Moves the cursor to an absolute pixel coordinate, flushing the old
/// cache window first and lazily invalidating the new one.
pub fn moveto(pit: &mut PixIter, pt: Point) {
    pit.flush_all();

    let mut cblk_offset =
        pt.y as i64 * pit.pitch_cblks as i64 + pt.x as i64 * pit.bpp_cblks as i64;
    let mut bit_offset = pt.x as i64 * pit.bpp_cbits as i64;
    if pit.desc.pitch_bits > 0 {
        bit_offset += pt.y as i64 * pit.pitch_cbits as i64;
    }

    let block_bits = pit.cache_bsz as i64 * 8;
    cblk_offset += bit_offset.div_euclid(block_bits) * pit.cache_bsz as i64;
    bit_offset = bit_offset.rem_euclid(block_bits);

    let cache_bsz = pit.cache_bsz as i64;
    let rem = cblk_offset.rem_euclid(cache_bsz);
    cblk_offset -= rem;
    bit_offset += rem * 8;

    pit.cblk_addr = cblk_offset as u32;
    pit.bit_addr = bit_offset as u32;
    pit.valid0 = false;
    pit.dirty0 = false;
    pit.valid1 = false;
    pit.dirty1 = false;
    pit.pos = pt;

    debug_assert_invariants(pit);
}

pub fn inc_x(pit: &mut PixIter) {
    let pt = Point::new(pit.pos.x + 1, pit.pos.y);
    moveto(pit, pt);
}

pub fn dec_x(pit: &mut PixIter) {
    let pt = Point::new(pit.pos.x - 1, pit.pos.y);
    moveto(pit, pt);
}

/// Clipped `inc_x`: no-op and returns `false` at the right image edge.
pub fn inc_x_cl(pit: &mut PixIter) -> bool {
    if pit.pos.x + 1 >= pit.desc.width as i32 {
        return false;
    }
    inc_x(pit);
    true
}

/// Clipped `dec_x`: no-op and returns `false` at the left image edge.
pub fn dec_x_cl(pit: &mut PixIter) -> bool {
    if pit.pos.x <= 0 {
        return false;
    }
    dec_x(pit);
    true
}

pub fn inc_y(pit: &mut PixIter) {
    let pt = Point::new(pit.pos.x, pit.pos.y + 1);
    moveto(pit, pt);
}

pub fn dec_y(pit: &mut PixIter) {
    let pt = Point::new(pit.pos.x, pit.pos.y - 1);
    moveto(pit, pt);
}

pub fn inc_y_cl(pit: &mut PixIter) -> bool {
    if pit.pos.y + 1 >= pit.desc.height as i32 {
        return false;
    }
    inc_y(pit);
    true
}

pub fn dec_y_cl(pit: &mut PixIter) -> bool {
    if pit.pos.y <= 0 {
        return false;
    }
    dec_y(pit);
    true
}

/// Moves to the start (x = 0) of the next scanline down.
pub fn next_scanln(pit: &mut PixIter) {
    let pt = Point::new(0, pit.pos.y + 1);
    moveto(pit, pt);
}

/// Moves to the start (x = 0) of the previous scanline up.
pub fn prev_scanln(pit: &mut PixIter) {
    let pt = Point::new(0, pit.pos.y - 1);
    moveto(pit, pt);
}

pub fn next_scanln_cl(pit: &mut PixIter) -> bool {
    if pit.pos.y + 1 >= pit.desc.height as i32 {
        return false;
    }
    next_scanln(pit);
    true
}

/// Clipped `prev_scanln`.
///
/// The source's `bg_pit_prev_scanln_cl` calls `bg_pit_next_scanln` here
/// instead of `bg_pit_prev_scanln` — a typo this crate does not reproduce.
pub fn prev_scanln_cl(pit: &mut PixIter) -> bool {
    if pit.pos.y <= 0 {
        return false;
    }
    prev_scanln(pit);
    true
}

impl<'buf> PixIter<'buf> {
    pub fn moveto(&mut self, pt: Point) {
        moveto(self, pt);
    }
    pub fn inc_x(&mut self) {
        inc_x(self)
    }
    pub fn dec_x(&mut self) {
        dec_x(self)
    }
    pub fn inc_x_cl(&mut self) -> bool {
        inc_x_cl(self)
    }
    pub fn dec_x_cl(&mut self) -> bool {
        dec_x_cl(self)
    }
    pub fn inc_y(&mut self) {
        inc_y(self)
    }
    pub fn dec_y(&mut self) {
        dec_y(self)
    }
    pub fn inc_y_cl(&mut self) -> bool {
        inc_y_cl(self)
    }
    pub fn dec_y_cl(&mut self) -> bool {
        dec_y_cl(self)
    }
    pub fn next_scanln(&mut self) {
        next_scanln(self)
    }
    pub fn prev_scanln(&mut self) {
        prev_scanln(self)
    }
    pub fn next_scanln_cl(&mut self) -> bool {
        next_scanln_cl(self)
    }
    pub fn prev_scanln_cl(&mut self) -> bool {
        prev_scanln_cl(self)
    }

    /// Replays a step precomputed by [`PixIter::compute_delta`] directly
    /// against the cache address, without going through `moveto`. Does not
    /// update [`PixIter::pos`] — callers using this for raw address
    /// striding (e.g. replaying the same `(dx, dy)` across many rows) are
    /// expected to track the logical coordinate themselves.
    pub fn advance_by(&mut self, delta: &AddrDelta) {
        self.flush_all();
        let mut cblk = self.cblk_addr as i64 + delta.cblk;
        let mut bit = self.bit_addr as i64 + delta.bit as i64;
        let block_bits = self.cache_bsz as i64 * 8;
        cblk += bit.div_euclid(block_bits) * self.cache_bsz as i64;
        bit = bit.rem_euclid(block_bits);
        self.cblk_addr = cblk as u32;
        self.bit_addr = bit as u32;
        self.valid0 = false;
        self.dirty0 = false;
        self.valid1 = false;
        self.dirty1 = false;
        debug_assert_invariants(self);
    }

    pub fn retreat_by(&mut self, delta: &AddrDelta) {
        self.advance_by(&AddrDelta {
            cblk: -delta.cblk,
            bit: -delta.bit,
        });
    }
}
