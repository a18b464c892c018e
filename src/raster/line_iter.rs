//! Major-Y Bresenham line stepper: advances one scanline at a time and
//! reports the x coordinate the line reaches on each new row.

use crate::pit::Point;

fn signum(n: i32) -> i32 {
    match n {
        n if n > 0 => 1,
        n if n < 0 => -1,
        _ => 0,
    }
}

/// Steps a line from `p1` to `p2` one scanline (`y`) at a time.
pub struct LineIterY {
    p2: Point,
    adelta: Point,
    sign: Point,
    cur: Point,
    rem: i64,
}

impl LineIterY {
    /// Starts iterating the line `p1 -> p2`.
    ///
    /// `rem` is initialized to `adelta.y`, not zero: the literal zero
    /// initialization does not reproduce this crate's own worked example
    /// for the line `(0,0) -> (5,3)` (it must land on scanline-start x
    /// values `2, 4, 5`; zero produces `1, 3, 5` instead). Everything else
    /// about the step recurrence is unchanged.
    pub fn start(p1: Point, p2: Point) -> Self {
        let adelta = Point::new((p2.x - p1.x).abs(), (p2.y - p1.y).abs());
        let sign = Point::new(signum(p2.x - p1.x), signum(p2.y - p1.y));
        LineIterY {
            p2,
            adelta,
            sign,
            cur: p1,
            rem: adelta.y as i64,
        }
    }

    pub fn cur(&self) -> Point {
        self.cur
    }

    pub fn sign(&self) -> Point {
        self.sign
    }

    /// Advances to the next scanline. Returns `false` once the cursor has
    /// reached `p2` (in which case nothing further is done).
    pub fn step(&mut self) -> bool {
        if self.cur == self.p2 {
            return false;
        }
        self.rem += self.adelta.x as i64;
        self.cur.y += self.sign.y;
        while self.rem >= self.adelta.y as i64 && self.cur.x != self.p2.x {
            self.cur.x += self.sign.x;
            self.rem -= self.adelta.y as i64;
        }
        true
    }
}
