use bootgraph::descriptor::{ImageDesc, Orientation};
use bootgraph::pit::bind;
use bootgraph::Point;

fn new_pit(width: u16, height: u16, bpp: u8) -> (Vec<u8>, ImageDesc) {
    let desc = ImageDesc::new(width, height, bpp, Orientation::TopLeft, 1);
    let buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    (buf, desc)
}

#[test]
fn inc_x_then_dec_x_returns_to_start() {
    let (mut buf, desc) = new_pit(8, 4, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    pit.moveto(Point::new(2, 1));
    pit.inc_x();
    pit.dec_x();
    assert_eq!(pit.pos(), Point::new(2, 1));
}

#[test]
fn clipped_inc_x_stops_at_right_edge() {
    let (mut buf, desc) = new_pit(4, 1, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    pit.moveto(Point::new(3, 0));
    assert!(!pit.inc_x_cl());
    assert_eq!(pit.pos(), Point::new(3, 0));
}

#[test]
fn clipped_dec_y_stops_at_top_edge() {
    let (mut buf, desc) = new_pit(4, 4, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    assert!(!pit.dec_y_cl());
    assert_eq!(pit.pos(), Point::new(0, 0));
}

#[test]
fn next_scanln_resets_x_and_advances_y() {
    let (mut buf, desc) = new_pit(4, 4, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    pit.moveto(Point::new(3, 0));
    pit.next_scanln();
    assert_eq!(pit.pos(), Point::new(0, 1));
}

#[test]
fn prev_scanln_cl_moves_to_previous_row_not_forward() {
    let (mut buf, desc) = new_pit(4, 4, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    pit.moveto(Point::new(0, 2));
    assert!(pit.prev_scanln_cl());
    assert_eq!(pit.pos(), Point::new(0, 1));
}

#[test]
fn prev_scanln_cl_refuses_at_top_row() {
    let (mut buf, desc) = new_pit(4, 4, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    assert!(!pit.prev_scanln_cl());
    assert_eq!(pit.pos(), Point::new(0, 0));
}
