use xorsim_core::error::XorSimError;
use xorsim_core::validate::validate_scenario;
use xorsim_core::{Scenario, ValueDomain};

#[test]
fn covering_domain_is_smallest_power_of_two() {
    let cases = [
        (0u32, 0u32, 1usize),
        (1, 0, 2),
        (3, 1, 4),
        (4, 0, 8),
        (5, 1000, 1024),
        (1023, 1023, 1024),
        (1024, 0, 2048),
    ];
    for (max_value, mask, size) in cases {
        let d = ValueDomain::covering(max_value, mask).unwrap();
        assert_eq!(d.size(), size, "max_value={max_value} mask={mask}");
        assert!(d.contains(max_value) && d.contains(mask));
        assert!(d.contains(max_value ^ mask));
    }
}

#[test]
fn too_wide_domain_is_rejected() {
    assert!(ValueDomain::covering(u32::MAX, 0).is_err());
    assert!(ValueDomain::with_bits(ValueDomain::MAX_BITS + 1).is_err());
}

#[test]
fn explicit_domain_must_cover_values_and_mask() {
    let mut s = Scenario::new(1, 3, vec![1, 2]);
    s.domain_bits = Some(2);
    assert!(validate_scenario(&s).is_ok());

    s.mask = 4;
    let err = validate_scenario(&s).unwrap_err();
    assert!(matches!(err, XorSimError::OutOfDomain { value: 4, size: 4 }));

    s.mask = 0;
    s.values.push(9);
    assert!(validate_scenario(&s).is_err());
}

#[test]
fn empty_scenario_is_rejected() {
    let s = Scenario::new(1, 0, vec![]);
    assert!(matches!(
        validate_scenario(&s),
        Err(XorSimError::Validation(_))
    ));
}

#[test]
fn wider_explicit_domain_gives_same_answer() {
    let s = Scenario::new(4, 6, vec![1, 7, 3, 3, 0]);
    let mut wide = s.clone();
    wide.domain_bits = Some(10);
    assert_eq!(xorsim_core::solve(&s).unwrap(), xorsim_core::solve(&wide).unwrap());
}
