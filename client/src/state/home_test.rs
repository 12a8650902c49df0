use super::*;

#[test]
fn next_banner_advances_and_wraps() {
    assert_eq!(next_banner(0, BANNERS.len()), 1);
    assert_eq!(next_banner(1, BANNERS.len()), 2);
    assert_eq!(next_banner(2, BANNERS.len()), 0);
}

#[test]
fn next_banner_with_no_slides_stays_at_zero() {
    assert_eq!(next_banner(4, 0), 0);
}
