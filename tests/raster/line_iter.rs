use bootgraph::{LineIterY, Point};

#[test]
fn reversed_line_mirrors_forward_line() {
    let mut fwd = LineIterY::start(Point::new(0, 0), Point::new(5, 3));
    let mut fwd_xs = Vec::new();
    while fwd.step() {
        fwd_xs.push(fwd.cur().x);
    }

    let mut back = LineIterY::start(Point::new(0, 3), Point::new(5, 0));
    let mut back_ys = Vec::new();
    while back.step() {
        back_ys.push(back.cur().y);
    }

    assert_eq!(fwd_xs, vec![2, 4, 5]);
    assert_eq!(back_ys, vec![2, 1, 0]);
}

#[test]
fn negative_slope_steps_left() {
    let mut it = LineIterY::start(Point::new(5, 0), Point::new(0, 3));
    let mut xs = Vec::new();
    while it.step() {
        xs.push(it.cur().x);
    }
    assert_eq!(it.cur(), Point::new(0, 3));
    assert!(xs.windows(2).all(|w| w[1] <= w[0]));
}
