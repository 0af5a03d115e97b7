use xorsim_core::scenario::text;
use xorsim_core::{solve, Scenario, Simulator};

#[test]
fn three_values_one_round() {
    let s = text::parse("3 1 1\n1 2 3\n").unwrap();
    let mut sim = Simulator::new(&s).unwrap();
    sim.run(s.rounds);

    // (1,2) -> second becomes 1^1 = 0; 3 unpaired
    assert_eq!(sim.table().to_sorted_values(), vec![0, 1, 3]);

    let e = solve(&s).unwrap();
    assert_eq!((e.min, e.max), (0, 3));
}

#[test]
fn four_zeros_reach_fixed_point() {
    let s = Scenario::new(2, 3, vec![0, 0, 0, 0]);
    let mut sim = Simulator::new(&s).unwrap();

    sim.step();
    assert_eq!(sim.table().counts(), &[2, 0, 0, 2]);

    sim.step();
    assert_eq!(sim.table().counts(), &[2, 0, 0, 2]);
    assert_eq!(sim.round(), 2);

    let e = sim.extremes().unwrap();
    assert_eq!((e.min, e.max), (0, 3));
}

#[test]
fn zero_rounds_reports_input_extremes() {
    let s = Scenario::new(0, 5, vec![4, 2, 6]);
    let e = solve(&s).unwrap();
    assert_eq!((e.min, e.max), (2, 6));
}

#[test]
fn single_value() {
    let s = Scenario::new(7, 9, vec![12]);
    let e = solve(&s).unwrap();
    assert_eq!((e.min, e.max), (12, 12));
}
