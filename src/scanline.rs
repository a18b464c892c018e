//! Scanline fill primitives built on top of the pixel iterator.
//!
//! The width suffix (`8`/`16`/`32`/`64`) only selects the Rust type of the
//! value parameter; every variant writes exactly `bpp` bits per pixel,
//! since they all funnel through [`PixIter::write_pix`].

use crate::pit::PixIter;

/// Writes `val` at the cursor, then steps right, `len` times.
pub fn scanline_fill64(pit: &mut PixIter, len: u16, val: u64) {
    for _ in 0..len {
        pit.write_pix(val);
        pit.inc_x();
    }
}

pub fn scanline_fill8(pit: &mut PixIter, len: u16, val: u8) {
    scanline_fill64(pit, len, val as u64);
}
pub fn scanline_fill16(pit: &mut PixIter, len: u16, val: u16) {
    scanline_fill64(pit, len, val as u64);
}
pub fn scanline_fill32(pit: &mut PixIter, len: u16, val: u32) {
    scanline_fill64(pit, len, val as u64);
}

/// Steps left, then writes `val` at the cursor, `len` times — a fill that
/// runs right to left.
pub fn scanline_rfill64(pit: &mut PixIter, len: u16, val: u64) {
    for _ in 0..len {
        pit.dec_x();
        pit.write_pix(val);
    }
}

pub fn scanline_rfill8(pit: &mut PixIter, len: u16, val: u8) {
    scanline_rfill64(pit, len, val as u64);
}
pub fn scanline_rfill16(pit: &mut PixIter, len: u16, val: u16) {
    scanline_rfill64(pit, len, val as u64);
}
pub fn scanline_rfill32(pit: &mut PixIter, len: u16, val: u32) {
    scanline_rfill64(pit, len, val as u64);
}

/// Writes `val` at the cursor, then steps left, `len` times — an "anchored"
/// right-to-left fill that leaves the cursor one pixel further left than
/// [`scanline_rfill64`] for the same starting position.
pub fn scanline_arfill64(pit: &mut PixIter, len: u16, val: u64) {
    for _ in 0..len {
        pit.write_pix(val);
        pit.dec_x();
    }
}

pub fn scanline_arfill8(pit: &mut PixIter, len: u16, val: u8) {
    scanline_arfill64(pit, len, val as u64);
}
pub fn scanline_arfill16(pit: &mut PixIter, len: u16, val: u16) {
    scanline_arfill64(pit, len, val as u64);
}
pub fn scanline_arfill32(pit: &mut PixIter, len: u16, val: u32) {
    scanline_arfill64(pit, len, val as u64);
}

/// Clears the whole image to `bg`, one scanline at a time.
pub fn ctx8_clear_img(pit: &mut PixIter, bg: u8) {
    let width = pit.desc().width;
    let height = pit.desc().height;
    pit.moveto(crate::pit::Point::new(0, 0));
    for row in 0..height {
        scanline_fill8(pit, width, bg);
        if row + 1 < height {
            pit.next_scanln();
        }
    }
    pit.flush_all();
}
