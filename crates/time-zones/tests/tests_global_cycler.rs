// Kept to a single test: the cursor is shared by the whole test binary.
#[test]
fn test_process_wide_cycle() {
    assert_eq!(time_zones::get_current(), -12.0);
    assert_eq!(time_zones::current_utc_offset().unwrap().whole_hours(), -12);

    assert_eq!(time_zones::get_next(), -11.0);
    assert_eq!(time_zones::get_current(), -11.0);

    let mut last = -11.0;
    for _ in 1..time_zones::Cursor::WRAP_INDEX {
        last = time_zones::get_next();
        assert_eq!(time_zones::get_current(), last);
    }
    assert_eq!(last, 13.0);

    assert_eq!(time_zones::get_next(), -11.0);
}
