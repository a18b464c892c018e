use bootgraph::descriptor::{ImageDesc, Orientation};
use bootgraph::pit::bind;
use bootgraph::Point;

#[test]
fn read_pix_defaults_to_zero() {
    let desc = ImageDesc::new(4, 4, 16, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let mut pit = bind(&mut buf, &desc, 3, false);
    assert_eq!(pit.read_pix(), 0);
}

#[test]
fn write_pix_then_moveto_and_back_preserves_value() {
    let desc = ImageDesc::new(4, 4, 16, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let mut pit = bind(&mut buf, &desc, 3, false);
    pit.moveto(Point::new(1, 1));
    pit.write_pix16(0xBEEF);
    pit.moveto(Point::new(0, 0));
    pit.moveto(Point::new(1, 1));
    assert_eq!(pit.read_pix16(), 0xBEEF);
}

#[test]
fn twoblk_mode_reads_back_what_it_writes() {
    let desc = ImageDesc::new(32, 1, 4, Orientation::TopLeft, 1);
    // A couple of extra guard bytes: two-block mode may cache one block
    // past the last pixel's row-aligned slot.
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize + 4];
    let mut pit = bind(&mut buf, &desc, 2, true);
    assert!(pit.is_twoblk());
    for x in 0..32 {
        pit.moveto(Point::new(x, 0));
        pit.write_pix((x % 16) as u64);
    }
    for x in 0..32 {
        pit.moveto(Point::new(x, 0));
        assert_eq!(pit.read_pix(), (x % 16) as u64);
    }
}

#[test]
fn uncached_writes_are_visible_without_flush() {
    let desc = ImageDesc::new(4, 4, 8, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let mut pit = bind(&mut buf, &desc, 0, false); // cache_sz=1 byte == bpp/8, uncached
    assert!(pit.is_uncached());
    pit.write_pix8(0x5A);
    drop(pit);
    assert_eq!(buf[0], 0x5A);
}
