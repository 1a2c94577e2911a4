//! Integration tests for Score
//!
//! Tests the inclusive 0..=100 bound.

use streamline_foundation::{ErrorKind, Score};

#[test]
fn score_bounds() {
    assert!(Score::new(0).is_ok());
    assert!(Score::new(100).is_ok());
    assert!(Score::new(101).is_err());
    assert!(Score::new(-1).is_err());
}

#[test]
fn score_error_names_bound() {
    let err = Score::new(250).unwrap_err();
    if let ErrorKind::Validation { value, min, max } = err.kind {
        assert_eq!((value, min, max), (250, 0, 100));
    } else {
        panic!("expected Validation");
    }
}

#[test]
fn scores_order_numerically() {
    let mut scores: Vec<Score> = [70, 10, 20].into_iter().map(|n| Score::new(n).unwrap()).collect();
    scores.sort();
    let values: Vec<u8> = scores.iter().map(|s| s.value()).collect();
    assert_eq!(values, vec![10, 20, 70]);
}
