use super::*;

#[test]
fn fnv_incremental_writes_match_one_shot() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"navicue");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"n");
    b.write_bytes(b"avicue");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_matches_reference_vectors() {
    assert_eq!(hash_str(""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(hash_str("a"), 0xaf63_dc4c_8601_ec8c);
    assert_eq!(hash_str("foobar"), 0x8594_4171_f739_67e8);
}

#[test]
fn signed_unit_spans_minus_one_to_one() {
    assert_eq!(signed_unit_from_bits(0, 0), -1.0);
    assert_eq!(signed_unit_from_bits(0xffff, 0), 1.0);
    assert_eq!(signed_unit_from_bits(0xffff_0000, 16), 1.0);
}

#[test]
fn hue_helpers_wrap_and_measure_shortest_arc() {
    assert_eq!(wrap_hue(-30.0), 330.0);
    assert_eq!(wrap_hue(720.0), 0.0);
    assert_eq!(hue_distance(350.0, 10.0), 20.0);
    assert_eq!(hue_distance(0.0, 180.0), 180.0);
}

#[test]
fn shift_toward_never_overshoots() {
    assert_eq!(shift_hue_toward(200.0, 220.0, 10.0), 210.0);
    assert_eq!(shift_hue_toward(215.0, 220.0, 10.0), 220.0);
    assert_eq!(shift_hue_toward(10.0, 350.0, 5.0), 5.0);
    assert_eq!(shift_hue_toward(40.0, 30.0, 0.0), 40.0);
}

#[test]
fn quantize_rounds_to_four_places() {
    assert_eq!(quantize(0.123_456), 0.1235);
    assert_eq!(quantize(1.0), 1.0);
}
