use dicecount::{estimate, Dice, DiceError, Query};

#[test]
fn d6_stays_on_the_die() {
    let mut dice = Dice::from_seed(7);
    assert!((0..1000).map(|_| dice.d6()).all(|v| (1..=6).contains(&v)));
}

#[test]
fn same_seed_same_estimate() {
    let q = Query::new(3, 10);
    assert_eq!(estimate(q, 500, 42).unwrap(), estimate(q, 500, 42).unwrap());
}

#[test]
fn estimate_converges_on_two_dice_seven() {
    let est = estimate(Query::new(2, 7), 60_000, 2025).unwrap();
    assert_eq!(est.samples, 60_000);
    assert!((est.percentage - 100.0 / 6.0).abs() < 1.0, "{est:?}");
}

#[test]
fn unreachable_target_never_hits() {
    let est = estimate(Query::new(2, 13), 1000, 1).unwrap();
    assert_eq!(est.hits, 0);
}

#[test]
fn zero_samples_is_invalid() {
    assert!(matches!(
        estimate(Query::new(2, 7), 0, 1),
        Err(DiceError::InvalidInput(_))
    ));
}

#[test]
fn rejects_what_the_counters_reject() {
    assert!(matches!(
        estimate(Query::new(50, 60), 10, 1),
        Err(DiceError::InvalidInput(_))
    ));
    assert!(matches!(
        estimate(Query::new(-1, 3), 10, 1),
        Err(DiceError::InvalidInput(_))
    ));
    assert!(matches!(
        estimate(Query::new(2, -3), 10, 1),
        Err(DiceError::InvalidInput(_))
    ));
}
