//! Stillwater `Validation` view of a validation pass.

use super::validate;
use crate::core::{Subject, Violation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate a subject, accumulating ALL violations into a `Validation`.
///
/// Returns `Validation::Success(())` when the subject has no violations and
/// `Validation::Failure` carrying every violation, in discovery order,
/// otherwise. Useful for composing with other stillwater validations.
pub fn validate_all<S: Subject>(subject: &S) -> Validation<(), NonEmptyVec<Violation>> {
    let checks: Vec<Validation<(), NonEmptyVec<Violation>>> = validate(subject)
        .into_iter()
        .map(|violation| Validation::fail(violation))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}
