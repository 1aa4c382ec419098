//! Address Arithmetic Tests.
//!
//! Every address is masked to 13 bits on construction, so memory is always
//! indexed in range and pc wraps from 8191 to 0.

use e20sim_core::common::{ADDR_MASK, Addr, MEM_SIZE};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0, 0)]
#[case(8191, 8191)]
#[case(8192, 0)]
#[case(0xFFFF, 8191)]
#[case(0x2005, 5)]
fn new_masks_to_13_bits(#[case] raw: u16, #[case] expected: u16) {
    assert_eq!(Addr::new(raw).val(), expected);
}

#[test]
fn next_wraps_at_top_of_memory() {
    assert_eq!(Addr::new(8191).wrapping_next(), Addr::ZERO);
    assert_eq!(Addr::new(10).wrapping_next().val(), 11);
}

#[test]
fn offset_applies_sign_extended_immediates() {
    assert_eq!(Addr::new(10).wrapping_offset(0xFFFF).val(), 9);
    assert_eq!(Addr::new(0).wrapping_offset(0xFFC0).val(), 8192 - 64);
}

#[test]
fn display_is_decimal_and_honours_width() {
    assert_eq!(format!("{:>5}", Addr::new(42)), "   42");
}

proptest! {
    #[test]
    fn index_is_always_in_range(raw in any::<u16>()) {
        let addr = Addr::new(raw);
        prop_assert!(addr.index() < MEM_SIZE);
        prop_assert_eq!(addr.val(), raw & ADDR_MASK);
    }
}
