//! Unit tests for error construction and aggregation behaviour.

use rstest::rstest;
use std::sync::Arc;

use super::StyleframeError;
use crate::document::DocumentFormat;

fn run_aggregate_tests<F>(name: &str, runner: F)
where
    F: Fn(Vec<Arc<StyleframeError>>) -> StyleframeError,
{
    assert_single_owned(name, &runner);
    assert_single_shared(name, &runner);
    assert_multi_entry(name, &runner);
}

fn assert_single_owned<F>(name: &str, runner: &F)
where
    F: Fn(Vec<Arc<StyleframeError>>) -> StyleframeError,
{
    let err = Arc::new(StyleframeError::validation("k", "m"));
    let outcome = runner(vec![err]);
    assert!(
        matches!(outcome, StyleframeError::Validation { .. }),
        "{name}: expected Validation, got {outcome:?}"
    );
}

fn assert_single_shared<F>(name: &str, runner: &F)
where
    F: Fn(Vec<Arc<StyleframeError>>) -> StyleframeError,
{
    let shared = Arc::new(StyleframeError::config(figment::Error::from("boom")));
    let outcome = runner(vec![Arc::clone(&shared)]);
    match outcome {
        StyleframeError::Aggregate(aggregate) => {
            assert_eq!(
                aggregate.len(),
                1,
                "{name}: expected single aggregate entry"
            );
        }
        other => panic!("{name}: expected Aggregate, got {other:?}"),
    }
}

fn assert_multi_entry<F>(name: &str, runner: &F)
where
    F: Fn(Vec<Arc<StyleframeError>>) -> StyleframeError,
{
    let first = Arc::new(StyleframeError::validation("recipes[0].name", "missing"));
    let second = Arc::new(StyleframeError::validation("recipes[1].name", "missing"));
    match runner(vec![first, second]) {
        StyleframeError::Aggregate(aggregate) => {
            let errors = aggregate.as_ref();
            assert_eq!(errors.len(), 2, "{name}: expected two aggregate entries");
            let borrowed: Vec<_> = errors.iter().collect();
            assert_eq!(borrowed.len(), 2, "{name}: borrowed iteration failed");
            let display = errors.to_string();
            let owned: Vec<_> = aggregate.into_iter().collect();
            assert_eq!(owned.len(), 2, "{name}: owned iteration failed");
            assert!(display.starts_with("1:"), "{name}: first entry missing");
            assert!(display.contains("\n2:"), "{name}: second entry missing");
        }
        other => panic!("{name}: expected Aggregate, got {other:?}"),
    }
}

#[test]
fn aggregate_panics_on_empty() {
    let empty: Vec<Arc<StyleframeError>> = vec![];
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        StyleframeError::aggregate(empty)
    }));
    assert!(result.is_err());
}

#[test]
fn try_aggregate_none_on_empty() {
    assert!(StyleframeError::try_aggregate(Vec::<Arc<StyleframeError>>::new()).is_none());
}

#[test]
fn both_aggregate_behaviours() {
    run_aggregate_tests("try_aggregate", |v| {
        StyleframeError::try_aggregate(v).map_or_else(
            || panic!("expected error aggregation to yield a value"),
            |err| err,
        )
    });
    run_aggregate_tests("aggregate", StyleframeError::aggregate);
}

#[rstest]
#[case::json("{", DocumentFormat::Json)]
#[case::trailing("[1,]", DocumentFormat::Json)]
fn json_errors_become_document_errors(#[case] input: &str, #[case] format: DocumentFormat) {
    let err = serde_json::from_str::<serde_json::Value>(input)
        .map_err(StyleframeError::from)
        .expect_err("input is malformed");
    match err {
        StyleframeError::Document { format: found, .. } => assert_eq!(found, format),
        other => panic!("expected Document, got {other:?}"),
    }
}

#[test]
fn config_errors_round_trip_through_figment() {
    let original = figment::Error::from("bad indent");
    let converted = figment::Error::from(StyleframeError::from(original));
    assert_eq!(converted.to_string(), "bad indent");
}

#[test]
fn validation_errors_name_their_key() {
    let err = StyleframeError::validation("recipes[2].variants", "expected a table");
    assert_eq!(
        err.to_string(),
        "Validation failed for 'recipes[2].variants': expected a table"
    );
}

#[test]
fn shared_errors_convert_to_figment_messages() {
    use crate::IntoFigmentError;

    let shared = Arc::new(StyleframeError::validation("recipes", "missing `recipes` array"));
    let borrowed = (&shared).into_figment();
    assert_eq!(borrowed.to_string(), shared.to_string());
    assert_eq!(shared.clone().into_figment().to_string(), borrowed.to_string());
}
