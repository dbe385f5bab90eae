use crate::measure::Accumulator;

#[test]
fn fold_moves_current_into_lifetime() {
    let mut acc = Accumulator::new();

    acc.accumulate(10);
    acc.accumulate(0);
    acc.accumulate(32);
    assert_eq!(acc.current(), 42);
    assert_eq!(acc.lifetime(), 0);

    assert_eq!(acc.fold(), 42);
    assert_eq!(acc.current(), 0);
    assert_eq!(acc.lifetime(), 42);
}

#[test]
fn lifetime_is_sum_of_all_intervals() {
    let mut acc = Accumulator::new();
    let intervals: [&[u64]; 4] = [&[1, 2, 3], &[], &[100], &[7, 7]];

    let mut expected = 0;
    for interval in intervals {
        let before = acc.lifetime();
        for n in interval {
            acc.accumulate(*n);
        }
        acc.fold();

        let sum: u64 = interval.iter().sum();
        expected += sum;
        assert_eq!(acc.lifetime(), before + sum);
        assert_eq!(acc.current(), 0);
    }
    assert_eq!(acc.lifetime(), expected);
}

#[test]
fn folding_an_empty_interval_changes_nothing() {
    let mut acc = Accumulator::new();
    acc.accumulate(5);
    acc.fold();

    assert_eq!(acc.fold(), 0);
    assert_eq!(acc.lifetime(), 5);
}

#[test]
fn matches_accumulate_independently() {
    let mut acc = Accumulator::new();
    acc.record_matches(2);
    acc.fold();
    acc.record_matches(1);

    assert_eq!(acc.matches(), 3);
    assert_eq!(acc.lifetime(), 0);
}
