//! Boot-time raster graphics core.
//!
//! A pixel-accurate 2-D framebuffer engine: random-access reads, writes,
//! scanline fills and primitive rasterization on images whose pixel format
//! may be narrower than, equal to, or wider than a machine word, and whose
//! scanlines may be packed to arbitrary bit boundaries.
//!
//! Layering: [`descriptor`] describes an image, [`pit`] is a cursor bound
//! to one, [`scanline`] builds scanline fills on top of the cursor, and
//! [`raster`] drives those fills from Bresenham line/triangle math.
//! [`endian`] and [`palette`] are standalone data/utility modules.

pub mod descriptor;
pub mod endian;
pub mod palette;
pub mod pit;
pub mod raster;
pub mod scanline;

#[cfg(feature = "c-abi")]
pub mod abi;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level convenience re-exports.
// ─────────────────────────────────────────────────────────────────────────────

pub use descriptor::{align_pitch, ImageDesc, Orientation};
pub use pit::{AddrDelta, PixIter, Point};
pub use raster::line_iter::LineIterY;
pub use raster::polygon::{lineto, quad_line, tri_fill64, tri_line};
pub use scanline::{
    ctx8_clear_img, scanline_arfill16, scanline_arfill32, scanline_arfill64, scanline_arfill8,
    scanline_fill16, scanline_fill32, scanline_fill64, scanline_fill8, scanline_rfill16,
    scanline_rfill32, scanline_rfill64, scanline_rfill8,
};
