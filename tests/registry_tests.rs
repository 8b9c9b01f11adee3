//! Registry and evaluator behavior through the public domain API.

use hindsight::domain::{Evaluator, MatchEvent, Registry, SubmitterId};
use hindsight::error::{EvaluationError, RegistryError};
use hindsight::testkit::domain::{make_submitters, owner, registry_with, submitter};

#[test]
fn second_submit_is_rejected_and_first_value_kept() {
    for (i, id) in make_submitters(5).into_iter().enumerate() {
        let mut registry = Registry::new(owner(), 0);
        let first = i as i64 * 7 - 10;

        registry.submit(id.clone(), first).unwrap();
        let err = registry.submit(id.clone(), first + 1).unwrap_err();

        assert_eq!(err, RegistryError::AlreadyPredicted { submitter: id.clone() });
        assert_eq!(registry.get(&id).unwrap().value(), first);
        assert_eq!(registry.len(), 1);
    }
}

#[test]
fn match_rule_agrees_with_clamped_reference() {
    let thresholds = [0u64, 1, 10, 1_000, u64::MAX / 2, u64::MAX];
    let actuals = [i64::MIN, i64::MIN + 5, -100, -1, 0, 1, 3, 105, i64::MAX - 5, i64::MAX];
    let values = [i64::MIN, -1_000, -95, -1, 0, 2, 95, 100, 115, 116, i64::MAX];

    for &threshold in &thresholds {
        let entries: Vec<(String, i64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("u{i}"), *v))
            .collect();
        let mut registry = Registry::new(owner(), threshold);
        for (id, value) in &entries {
            registry.submit(SubmitterId::from(id.as_str()), *value).unwrap();
        }

        for &actual in &actuals {
            let lower = (i128::from(actual) - i128::from(threshold)).max(i128::from(i64::MIN));
            let upper = (i128::from(actual) + i128::from(threshold)).min(i128::from(i64::MAX));
            let expected: Vec<MatchEvent> = entries
                .iter()
                .filter(|(_, v)| lower <= i128::from(*v) && i128::from(*v) <= upper)
                .map(|(id, v)| MatchEvent::new(SubmitterId::from(id.as_str()), *v))
                .collect();

            let matches = Evaluator::new(&registry).evaluate(actual, &owner()).unwrap();
            assert_eq!(
                matches, expected,
                "threshold={threshold} actual={actual}"
            );
        }
    }
}

#[test]
fn evaluation_is_repeatable_on_unchanged_registry() {
    let registry = registry_with(5, &[("a", 10), ("b", 14), ("c", 16), ("d", 4)]);
    let evaluator = Evaluator::new(&registry);

    let runs: Vec<_> = (0..5)
        .map(|_| evaluator.evaluate(10, &owner()).unwrap())
        .collect();
    assert!(runs.windows(2).all(|w| w[0] == w[1]));

    let snapshot = registry.snapshot();
    let _ = evaluator.evaluate(-3, &owner()).unwrap();
    assert_eq!(registry.snapshot(), snapshot);
}

#[test]
fn non_owner_always_unauthorized() {
    let registry = registry_with(1_000, &[("u1", 100), ("u2", 200)]);
    let evaluator = Evaluator::new(&registry);

    for caller in ["u1", "u2", "o", "", "O "] {
        let err = evaluator.evaluate(100, &submitter(caller)).unwrap_err();
        assert_eq!(err, EvaluationError::Unauthorized { caller: submitter(caller) });
    }
}

#[test]
fn scenario_threshold_ten() {
    let registry = registry_with(10, &[("U1", 100), ("U2", 80)]);
    let matches = Evaluator::new(&registry).evaluate(105, &owner()).unwrap();
    assert_eq!(matches, vec![MatchEvent::new(submitter("U1"), 100)]);
}

#[test]
fn scenario_exact_match_only() {
    let registry = registry_with(0, &[("U1", 50)]);
    let evaluator = Evaluator::new(&registry);

    assert_eq!(
        evaluator.evaluate(50, &owner()).unwrap(),
        vec![MatchEvent::new(submitter("U1"), 50)]
    );
    assert!(evaluator.evaluate(51, &owner()).unwrap().is_empty());
}

#[test]
fn scenario_resubmission_keeps_listing() {
    let mut registry = Registry::new(owner(), 10);
    registry.submit(submitter("U1"), 10).unwrap();
    assert!(matches!(
        registry.submit(submitter("U1"), 20),
        Err(RegistryError::AlreadyPredicted { .. })
    ));

    let listed: Vec<_> = registry
        .list_predictions()
        .map(|(id, v)| (id.as_str().to_string(), v))
        .collect();
    assert_eq!(listed, vec![("U1".to_string(), 10)]);
}

#[test]
fn scenario_empty_registry() {
    let registry = Registry::new(owner(), 10);
    assert!(Evaluator::new(&registry)
        .evaluate(100, &owner())
        .unwrap()
        .is_empty());
}
