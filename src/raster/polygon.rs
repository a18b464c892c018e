//! Polygon outline and filled-triangle rasterization built on top of the
//! major-Y line iterator and the scanline fill primitives.

use std::mem;

use super::line_iter::LineIterY;
use crate::pit::{Point, PixIter};
use crate::scanline::{scanline_arfill64, scanline_fill64, scanline_rfill64};

/// Draws a line from the cursor's current position to `p2`, leaving the
/// cursor at `p2`.
///
/// Each intermediate scanline's horizontal run is filled in the direction
/// the line is heading (`scanline_fill64` moving right, `scanline_arfill64`
/// moving left); the final pixel at `p2` is always written explicitly, so a
/// standalone call always draws a complete, closed segment even though the
/// per-row fills individually stop one pixel short of each row's far end
/// (chained calls, as in [`tri_line`]/[`quad_line`], rely on the next
/// segment's own start pixel to cover that point, and this one draws it
/// again harmlessly when closing a polygon).
pub fn lineto(pit: &mut PixIter, p2: Point, val: u64) {
    let p1 = pit.pos();
    pit.write_pix(val);

    let mut it = LineIterY::start(p1, p2);
    let mut last = p1;
    while it.step() {
        let cur = it.cur();
        let len = cur.x - last.x;
        match len.cmp(&0) {
            std::cmp::Ordering::Equal => pit.write_pix(val),
            std::cmp::Ordering::Greater => scanline_fill64(pit, len as u16, val),
            std::cmp::Ordering::Less => scanline_arfill64(pit, (-len) as u16, val),
        }
        if it.sign().y > 0 {
            pit.inc_y();
        } else if it.sign().y < 0 {
            pit.dec_y();
        }
        last = cur;
    }

    pit.moveto(p2);
    pit.write_pix(val);
}

/// Draws the three-segment outline `p1 -> p2 -> p3 -> p1`.
pub fn tri_line(pit: &mut PixIter, p1: Point, p2: Point, p3: Point, val: u64) {
    pit.moveto(p1);
    lineto(pit, p2, val);
    lineto(pit, p3, val);
    lineto(pit, p1, val);
}

/// Draws the four-segment outline `p1 -> p2 -> p3 -> p4 -> p1`.
pub fn quad_line(pit: &mut PixIter, p1: Point, p2: Point, p3: Point, p4: Point, val: u64) {
    pit.moveto(p1);
    lineto(pit, p2, val);
    lineto(pit, p3, val);
    lineto(pit, p4, val);
    lineto(pit, p1, val);
}

/// Fills a triangle with a zig-zag scanline sweep: the three vertices are
/// sorted ascending by `y`, then two edge trackers (the short edge
/// `p1->p2` followed by `p2->p3`, and the long edge `p1->p3` spanning the
/// full height) are stepped in lockstep, one row at a time, filling the
/// span between them at each row's *pre-step* position before advancing,
/// and alternating the fill sweep direction each row to minimize cursor
/// repositioning. `y == p1.y` is a single point (both edges start at
/// `p1`) unless `p1.y == p2.y`, a flat top edge whose whole span belongs
/// to that row; the short edge is resolved to `p2` before that row is
/// filled so the flat top paints in full. `y == p3.y` is never filled
/// (exclusive max).
pub fn tri_fill64(pit: &mut PixIter, mut p1: Point, mut p2: Point, mut p3: Point, val: u64) {
    if p1.y > p2.y {
        mem::swap(&mut p1, &mut p2);
    }
    if p2.y > p3.y {
        mem::swap(&mut p2, &mut p3);
    }
    if p1.y > p2.y {
        mem::swap(&mut p1, &mut p2);
    }

    if p1.y == p3.y {
        return;
    }

    let mut lit_long = LineIterY::start(p1, p3);
    let mut long_pos = p1;

    let mut lit_short = LineIterY::start(p1, p2);
    let mut short_pos = p1;
    let mut on_second_seg = false;
    let mut x_reverse = p2.x > p3.x;

    // A flat top edge collapses entirely into the row both its endpoints
    // share; resolve it before that row is filled instead of stepping
    // through a row transition that never happens.
    if p1.y == p2.y {
        lit_short.step();
        short_pos = lit_short.cur();
        lit_short = LineIterY::start(p2, p3);
        on_second_seg = true;
        x_reverse = p2.x > long_pos.x;
    }

    let mut zigzag_left = false;
    let mut y = p1.y;

    while y < p3.y {
        let (left_x, right_x) = if x_reverse {
            (long_pos.x, short_pos.x)
        } else {
            (short_pos.x, long_pos.x)
        };
        let len = (right_x - left_x).max(0) as u16;
        if len > 0 {
            if zigzag_left {
                pit.moveto(Point::new(left_x + len as i32, y));
                scanline_rfill64(pit, len, val);
            } else {
                pit.moveto(Point::new(left_x, y));
                scanline_fill64(pit, len, val);
            }
            zigzag_left = !zigzag_left;
        }

        if !on_second_seg && short_pos == p2 {
            lit_short = LineIterY::start(p2, p3);
            on_second_seg = true;
            x_reverse = p2.x > long_pos.x;
        }

        lit_long.step();
        lit_short.step();
        long_pos = lit_long.cur();
        short_pos = lit_short.cur();
        y = long_pos.y;
    }
}
