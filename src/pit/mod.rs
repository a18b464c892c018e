//! The pixel iterator (PIT): a cursor bound to one image buffer that reads
//! and writes individual pixels, arbitrary bit slices, and scanline runs
//! through a small block cache.

mod access;
pub mod bind;
mod cache;
mod movement;
mod types;

pub use bind::bind;
pub use types::{AddrDelta, Point, PixIter};
