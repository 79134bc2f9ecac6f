use super::*;

#[test]
fn fnv_empty_input_is_offset_basis() {
    let h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    assert_eq!(h.finish(), 0xcbf2_9ce4_8422_2325);
}

#[test]
fn fnv_matches_reference_vector() {
    let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn hash_xy_depends_on_every_input() {
    let base = hash_xy(7, 10, 20);
    assert_eq!(base, hash_xy(7, 10, 20));
    assert_ne!(base, hash_xy(8, 10, 20));
    assert_ne!(base, hash_xy(7, 11, 20));
    assert_ne!(base, hash_xy(7, 10, 21));
    assert_ne!(hash_xy(7, 1, 2), hash_xy(7, 2, 1));
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
}
