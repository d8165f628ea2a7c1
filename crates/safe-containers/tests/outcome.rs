//! Tests for the success/failure container.
//!
//! These validate ok-ness classification, cause resolution (including the
//! synthesised cause for the degenerate state) and composition with
//! `Optional`.

use rstest::rstest;
use safe_containers::{Failure, Optional, Outcome};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("some error")]
struct SomeError;

const fn possibly_failing_lookup(should_fail: bool) -> (Optional<i32>, Option<SomeError>) {
    if should_fail {
        return (Optional::empty(), Some(SomeError));
    }
    (Optional::holding(0), None)
}

#[rstest]
#[case::value_without_cause(Outcome::from_value(1, None), true)]
#[case::zero_without_cause(Outcome::from_value(0, None), true)]
#[case::value_with_cause(Outcome::from_value(0, Some(SomeError)), false)]
#[case::cause_without_value(Outcome::from_nullable(None, Some(SomeError)), false)]
#[case::neither(Outcome::from_nullable(None, None), false)]
fn ok_requires_value_and_no_cause(#[case] outcome: Outcome<i32, SomeError>, #[case] ok: bool) {
    assert_eq!(outcome.is_ok(), ok);
    assert_eq!(outcome.is_err(), !ok);
}

#[rstest]
#[case::ok(Outcome::from_value(1, None), None)]
#[case::supplied(Outcome::from_value(1, Some(SomeError)), Some(Failure::Cause(SomeError)))]
#[case::supplied_without_value(
    Outcome::from_parts(Optional::empty(), Some(SomeError)),
    Some(Failure::Cause(SomeError))
)]
#[case::synthesized(Outcome::from_parts(Optional::empty(), None), Some(Failure::MissingValue))]
fn cause_resolution(
    #[case] outcome: Outcome<i32, SomeError>,
    #[case] want: Option<Failure<SomeError>>,
) {
    assert_eq!(outcome.cause().map(Failure::cloned), want);
}

#[test]
fn synthesized_cause_is_reported_as_missing_value() {
    let outcome: Outcome<i32, SomeError> = Outcome::from_nullable(None, None);
    let cause = outcome.cause();

    assert!(cause.is_some_and(|failure| failure.is_synthesized()));
    assert_eq!(
        cause.map(|failure| failure.to_string()),
        Some("outcome has neither a cause nor a value".to_owned())
    );
}

#[test]
fn unpack_ok_returns_value_alias() {
    let outcome: Outcome<i32, SomeError> = Outcome::from_value(0, None);
    assert_eq!(outcome.unpack(), Ok(&0));
}

#[rstest]
#[case::supplied(Outcome::from_value(0, Some(SomeError)))]
#[case::synthesized(Outcome::from_nullable(None, None))]
fn unpack_not_ok_returns_resolved_cause(#[case] outcome: Outcome<i32, SomeError>) {
    assert_eq!(outcome.unpack().err(), outcome.cause());
    assert!(outcome.unpack().is_err());
}

#[rstest]
#[case::ok(Outcome::from_value(1, None), 1)]
#[case::err(Outcome::from_value(1, Some(SomeError)), -1)]
#[case::degenerate(Outcome::from_nullable(None, None), -1)]
fn unwrap_or_default_falls_back_when_not_ok(
    #[case] outcome: Outcome<i32, SomeError>,
    #[case] want: i32,
) {
    assert_eq!(outcome.unwrap_or_default(-1), want);
}

#[test]
fn unwrap_or_fail_copies_value() {
    let outcome: Outcome<Vec<u8>, SomeError> = Outcome::from_value(vec![1], None);
    let mut copy = outcome.unwrap_or_fail();
    copy.push(2);

    assert_eq!(copy, vec![1, 2]);
    assert_eq!(outcome.unpack(), Ok(&vec![1]));
}

#[test]
#[should_panic(expected = "unwrapped an Outcome that is not ok")]
fn unwrap_or_fail_panics_on_degenerate_outcome() {
    let outcome: Outcome<i32, SomeError> = Outcome::from_nullable(None, None);
    assert_eq!(outcome.unwrap_or_fail(), 0);
}

#[test]
fn converts_from_standard_result() {
    let ok: Outcome<i32, SomeError> = Ok(3).into();
    let err: Outcome<i32, SomeError> = Err(SomeError).into();

    assert_eq!(ok.unpack(), Ok(&3));
    assert_eq!(err.cause(), Some(Failure::Cause(&SomeError)));
    assert!(err.payload().is_absent());
}

#[rstest]
#[case::ok(Outcome::from_value(4, None), Ok(4))]
#[case::err(Outcome::from_value(4, Some(SomeError)), Err(Failure::Cause(SomeError)))]
#[case::degenerate(Outcome::from_nullable(None, None), Err(Failure::MissingValue))]
fn into_result_owns_value_or_cause(
    #[case] outcome: Outcome<i32, SomeError>,
    #[case] want: Result<i32, Failure<SomeError>>,
) {
    assert_eq!(outcome.into_result(), want);
}

#[rstest]
#[case::succeeds(false, 0)]
#[case::fails(true, -1)]
fn outcome_of_optional_composes(#[case] should_fail: bool, #[case] want: i32) {
    let (value, cause) = possibly_failing_lookup(should_fail);
    let outcome = Outcome::from_value(value, cause);
    let fallback = -1;

    let resolved = outcome
        .unwrap_or_default(Optional::holding(fallback))
        .copy_or_default(fallback);

    assert_eq!(resolved, want);
}
