use bootgraph::descriptor::{ImageDesc, Orientation};
use bootgraph::pit::bind;

#[test]
fn uncached_mode_triggers_for_byte_aligned_whole_block_bpp() {
    let desc = ImageDesc::new(8, 8, 32, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let pit = bind(&mut buf, &desc, 2, false); // cache_sz = 4 bytes == bpp/8
    assert!(pit.is_uncached());
}

#[test]
fn cached_mode_for_sub_byte_bpp() {
    let desc = ImageDesc::new(16, 4, 4, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let pit = bind(&mut buf, &desc, 1, false);
    assert!(!pit.is_uncached());
}

#[test]
fn twoblk_is_disabled_when_uncached() {
    let desc = ImageDesc::new(8, 8, 8, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let pit = bind(&mut buf, &desc, 0, true); // cache_sz=1 byte, bpp=8 -> uncached
    assert!(pit.is_uncached());
    assert!(!pit.is_twoblk());
}

#[test]
fn bind_starts_at_origin() {
    let desc = ImageDesc::new(4, 4, 8, Orientation::TopLeft, 1);
    let mut buf = vec![0u8; desc.pitch as usize * desc.height as usize];
    let pit = bind(&mut buf, &desc, 3, false);
    assert_eq!(pit.pos(), bootgraph::Point::new(0, 0));
}
