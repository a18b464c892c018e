use bootgraph::descriptor::{ImageDesc, Orientation};
use bootgraph::pit::bind;
use bootgraph::{quad_line, tri_fill64, tri_line, Point};

fn blank(width: u16, height: u16) -> (Vec<u8>, ImageDesc) {
    let desc = ImageDesc::new(width, height, 8, Orientation::TopLeft, 1);
    let buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    (buf, desc)
}

#[test]
fn tri_line_draws_all_three_vertices() {
    let (mut buf, desc) = blank(8, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    tri_line(
        &mut pit,
        Point::new(1, 1),
        Point::new(6, 1),
        Point::new(1, 6),
        0x7F,
    );
    pit.flush_all();
    let pitch = desc.pitch as usize;
    assert_eq!(buf[1 * pitch + 1], 0x7F);
    assert_eq!(buf[1 * pitch + 6], 0x7F);
    assert_eq!(buf[6 * pitch + 1], 0x7F);
}

#[test]
fn quad_line_closes_back_to_start() {
    let (mut buf, desc) = blank(8, 8);
    let mut pit = bind(&mut buf, &desc, 3, false);
    quad_line(
        &mut pit,
        Point::new(1, 1),
        Point::new(5, 1),
        Point::new(5, 5),
        Point::new(1, 5),
        0x33,
    );
    pit.flush_all();
    let pitch = desc.pitch as usize;
    assert_eq!(buf[1 * pitch + 1], 0x33);
    assert_eq!(buf[5 * pitch + 5], 0x33);
}

#[test]
fn tri_fill_leaves_ymax_row_empty_and_paints_the_row_above_it() {
    let (mut buf, desc) = blank(6, 6);
    let mut pit = bind(&mut buf, &desc, 3, false);
    tri_fill64(
        &mut pit,
        Point::new(0, 0),
        Point::new(0, 5),
        Point::new(5, 5),
        0xFF,
    );
    pit.flush_all();
    let pitch = desc.pitch as usize;
    let ymax_row = &buf[pitch * 5..pitch * 5 + 5];
    assert!(ymax_row.iter().all(|&b| b == 0));
    let row_above = &buf[pitch * 4..pitch * 4 + 5];
    assert!(row_above.iter().any(|&b| b == 0xFF));
}

#[test]
fn tri_fill_paints_the_full_flat_top_row() {
    let (mut buf, desc) = blank(6, 4);
    let mut pit = bind(&mut buf, &desc, 3, false);
    tri_fill64(
        &mut pit,
        Point::new(0, 0),
        Point::new(4, 0),
        Point::new(2, 3),
        0xFF,
    );
    pit.flush_all();
    assert_eq!(&buf[0..4], &[0xFF; 4]);
}

#[test]
fn tri_fill_is_symmetric_under_vertex_rotation() {
    let (mut buf_a, desc) = blank(10, 10);
    let (mut buf_b, _) = blank(10, 10);
    let mut pit_a = bind(&mut buf_a, &desc, 3, false);
    let mut pit_b = bind(&mut buf_b, &desc, 3, false);

    let p1 = Point::new(1, 1);
    let p2 = Point::new(8, 2);
    let p3 = Point::new(3, 8);

    tri_fill64(&mut pit_a, p1, p2, p3, 0x11);
    tri_fill64(&mut pit_b, p2, p3, p1, 0x11);
    pit_a.flush_all();
    pit_b.flush_all();

    let painted_a = buf_a.iter().filter(|&&b| b == 0x11).count();
    let painted_b = buf_b.iter().filter(|&&b| b == 0x11).count();
    assert_eq!(painted_a, painted_b);
}
