//! C-ABI operation surface, gated behind the `c-abi` feature so a non-Rust
//! bootloader or kernel can link this crate the same way the original
//! `bootgraph.c`/`bootgraph.h` pair was linked.
//!
//! Every shim here guards its raw-pointer arguments (null checks, and
//! where a size is supplied, zero/overflow checks) and returns a
//! documented sentinel instead of panicking across the FFI boundary: `0`
//! for success, a negative value for a precondition failure. Most PIT
//! movement operations have no failure mode and return nothing.

use std::slice;

use crate::descriptor::ImageDesc;
use crate::pit::{self, Point, PixIter};
use crate::scanline;

/// Opaque handle to a bound [`PixIter`]. The backing buffer's lifetime is
/// the caller's responsibility: it must outlive every `bg_pit_*` call made
/// through this handle, up to and including `bg_pit_unbind`.
pub struct BgPitHandle {
    inner: PixIter<'static>,
}

/// Binds a cursor over `data[0..data_len]`. Returns null if `data` is null
/// or `data_len` is zero.
///
/// # Safety
/// `data` must point to at least `data_len` valid, writable bytes that
/// remain valid until the returned handle is passed to
/// [`bg_pit_unbind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_bind(
    data: *mut u8,
    data_len: usize,
    width: u16,
    height: u16,
    bpp: u8,
    pitch: u32,
    pitch_bits: u8,
    image_desc_byte: u8,
    cache_sz_log2: u8,
    twoblk: i32,
) -> *mut BgPitHandle {
    if data.is_null() || data_len == 0 {
        return std::ptr::null_mut();
    }
    let buf: &'static mut [u8] = slice::from_raw_parts_mut(data, data_len);
    let desc = ImageDesc {
        width,
        height,
        bpp,
        pitch,
        pitch_bits,
        image_desc: image_desc_byte,
    };
    let iter = pit::bind(buf, &desc, cache_sz_log2, twoblk != 0);
    Box::into_raw(Box::new(BgPitHandle { inner: iter }))
}

/// Flushes any dirty cache blocks and releases the handle. Passing null
/// is a no-op.
///
/// # Safety
/// `handle` must be a pointer returned by [`bg_pit_bind`] and not
/// already freed.
#[no_mangle]
pub unsafe extern "C" fn bg_pit_unbind(handle: *mut BgPitHandle) {
    if handle.is_null() {
        return;
    }
    let mut boxed = Box::from_raw(handle);
    boxed.inner.flush_all();
}

macro_rules! with_pit {
    ($handle:ident, $body:expr) => {{
        if $handle.is_null() {
            return -1;
        }
        let pit = &mut (*$handle).inner;
        $body(pit);
        0
    }};
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_moveto(handle: *mut BgPitHandle, x: i32, y: i32) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.moveto(Point::new(x, y)))
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_inc_x(handle: *mut BgPitHandle) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.inc_x())
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_dec_x(handle: *mut BgPitHandle) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.dec_x())
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_next_scanln(handle: *mut BgPitHandle) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.next_scanln())
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_prev_scanln(handle: *mut BgPitHandle) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.prev_scanln())
}

/// Returns the pixel at the cursor widened to 64 bits, or `0` if `handle`
/// is null.
///
/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_read_pix64(handle: *mut BgPitHandle) -> u64 {
    if handle.is_null() {
        return 0;
    }
    (*handle).inner.read_pix()
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_write_pix64(handle: *mut BgPitHandle, value: u64) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.write_pix(value))
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_get_pix64(handle: *mut BgPitHandle, x: i32, y: i32) -> u64 {
    if handle.is_null() {
        return 0;
    }
    (*handle).inner.get_pix64(Point::new(x, y))
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_put_pix64(
    handle: *mut BgPitHandle,
    x: i32,
    y: i32,
    value: u64,
) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| pit.put_pix64(
        Point::new(x, y),
        value
    ))
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_scanline_fill64(
    handle: *mut BgPitHandle,
    len: u16,
    value: u64,
) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| scanline::scanline_fill64(
        pit, len, value
    ))
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_lineto64(handle: *mut BgPitHandle, x: i32, y: i32, value: u64) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| crate::lineto(
        pit,
        Point::new(x, y),
        value
    ))
}

/// # Safety
/// `handle` must be a live pointer from [`bg_pit_bind`].
#[no_mangle]
pub unsafe extern "C" fn bg_pit_tri_fill64(
    handle: *mut BgPitHandle,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    value: u64,
) -> i32 {
    with_pit!(handle, |pit: &mut PixIter| crate::tri_fill64(
        pit,
        Point::new(x1, y1),
        Point::new(x2, y2),
        Point::new(x3, y3),
        value
    ))
}

/// Rounds `width` up to the next multiple of `align`.
#[no_mangle]
pub extern "C" fn bg_align_pitch(width: u16, align: u8) -> u16 {
    crate::descriptor::align_pitch(width, align)
}

#[no_mangle]
pub extern "C" fn bg_get_endian() -> u8 {
    crate::endian::endian()
}

#[no_mangle]
pub extern "C" fn bg_set_endian(value: u8) {
    crate::endian::set_endian(value)
}

/// Reverses `buf[0..len]` in place. A no-op if `buf` is null.
///
/// # Safety
/// `buf` must point to at least `len` valid, writable bytes.
#[no_mangle]
pub unsafe extern "C" fn bg_byte_swap(buf: *mut u8, len: usize) {
    if buf.is_null() {
        return;
    }
    crate::endian::byte_swap(slice::from_raw_parts_mut(buf, len));
}

/// # Safety
/// `buf` must point to at least `len` valid, writable bytes.
#[no_mangle]
pub unsafe extern "C" fn bg_bit_swap_image(buf: *mut u8, len: usize) {
    if buf.is_null() {
        return;
    }
    crate::endian::bit_swap_image(slice::from_raw_parts_mut(buf, len));
}
