//! Rule functions.
//!
//! Every rule receives all constraints declared on the field and ignores
//! itself when its own key is absent. A rule appends at most one violation.

use super::error::RuleError;
use super::patterns;
use super::{MAX, MAX_LENGTH, MIN, MIN_LENGTH, PATTERN, REQUIRED};
use crate::core::{is_empty, qualify, Value, Violation};
use crate::declaration::Constraints;
use std::cmp::Ordering;
use tracing::warn;

/// `required=true`: the value must not be empty.
pub fn required(
    constraints: &Constraints<'_>,
    value: &Value<'_>,
    name: &str,
    mut violations: Vec<Violation>,
    path: &str,
) -> Vec<Violation> {
    if let Some(required) = constraints.get(REQUIRED) {
        if required == "true" && is_empty(value) {
            violations.push(Violation::new(qualify(path, name), REQUIRED));
        }
    }

    violations
}

/// `min=<bound>`: a present number must not be below the bound.
pub fn min(
    constraints: &Constraints<'_>,
    value: &Value<'_>,
    name: &str,
    violations: Vec<Violation>,
    path: &str,
) -> Vec<Violation> {
    let Some(raw) = constraints.get(MIN) else {
        return violations;
    };

    let outcome = compare_to_bound(MIN, raw, value);
    record(MIN, Ordering::Less, outcome, qualify(path, name), violations)
}

/// `max=<bound>`: a present number must not be above the bound.
pub fn max(
    constraints: &Constraints<'_>,
    value: &Value<'_>,
    name: &str,
    violations: Vec<Violation>,
    path: &str,
) -> Vec<Violation> {
    let Some(raw) = constraints.get(MAX) else {
        return violations;
    };

    let outcome = compare_to_bound(MAX, raw, value);
    record(MAX, Ordering::Greater, outcome, qualify(path, name), violations)
}

/// `pattern=<regex>`: the whole string must match.
///
/// A pattern that does not compile can never match, so it is reported as a
/// violation.
pub fn pattern(
    constraints: &Constraints<'_>,
    value: &Value<'_>,
    name: &str,
    mut violations: Vec<Violation>,
    path: &str,
) -> Vec<Violation> {
    let Some(pattern) = constraints.get(PATTERN) else {
        return violations;
    };

    let field = qualify(path, name);
    let text = match as_text(PATTERN, value) {
        Ok(Some(text)) => text,
        Ok(None) => return violations,
        Err(err) => {
            warn!(field = %field, error = %err, "skipping rule");
            return violations;
        }
    };

    match patterns::compile(pattern) {
        Ok(regex) if regex.is_match(text) => {}
        Ok(_) => violations.push(Violation::new(field, PATTERN)),
        Err(err) => {
            warn!(field = %field, error = %err, "pattern treated as violated");
            violations.push(Violation::new(field, PATTERN));
        }
    }

    violations
}

/// `maxlength=<n>`: a present string must not exceed `n` characters.
pub fn max_length(
    constraints: &Constraints<'_>,
    value: &Value<'_>,
    name: &str,
    violations: Vec<Violation>,
    path: &str,
) -> Vec<Violation> {
    let Some(raw) = constraints.get(MAX_LENGTH) else {
        return violations;
    };

    let outcome = compare_length(MAX_LENGTH, raw, value);
    record(MAX_LENGTH, Ordering::Greater, outcome, qualify(path, name), violations)
}

/// `minlength=<n>`: a present string must have at least `n` characters.
pub fn min_length(
    constraints: &Constraints<'_>,
    value: &Value<'_>,
    name: &str,
    violations: Vec<Violation>,
    path: &str,
) -> Vec<Violation> {
    let Some(raw) = constraints.get(MIN_LENGTH) else {
        return violations;
    };

    let outcome = compare_length(MIN_LENGTH, raw, value);
    record(MIN_LENGTH, Ordering::Less, outcome, qualify(path, name), violations)
}

/// Append a violation when the comparison came out as `violates`; log and
/// skip on rule misuse.
fn record(
    rule: &'static str,
    violates: Ordering,
    outcome: Result<Option<Ordering>, RuleError>,
    field: String,
    mut violations: Vec<Violation>,
) -> Vec<Violation> {
    match outcome {
        Ok(Some(ordering)) if ordering == violates => {
            violations.push(Violation::new(field, rule));
        }
        Ok(_) => {}
        Err(err) => warn!(field = %field, error = %err, "skipping rule"),
    }

    violations
}

/// Order `value` against the declared bound.
///
/// Integers are compared against an integer bound, floats against a decimal
/// bound. Numbers are never empty, so only an unset optional counts as
/// absent. `None` means there is nothing to compare (unset optional or NaN).
/// Kinds are checked before presence so misuse on an empty value is still
/// reported.
fn compare_to_bound(
    rule: &'static str,
    raw: &str,
    value: &Value<'_>,
) -> Result<Option<Ordering>, RuleError> {
    match value {
        Value::Int(v) => Ok(Some(i128::from(*v).cmp(&integer_bound(rule, raw)?))),
        Value::Uint(v) => Ok(Some(i128::from(*v).cmp(&integer_bound(rule, raw)?))),
        Value::Float(v) => {
            let bound = raw
                .parse::<f64>()
                .map_err(|source| RuleError::InvalidDecimalBound {
                    rule,
                    raw: raw.to_string(),
                    source,
                })?;
            Ok(v.partial_cmp(&bound))
        }
        Value::Optional(Some(inner)) => compare_to_bound(rule, raw, inner),
        Value::Optional(None) => Ok(None),
        other => Err(RuleError::KindMismatch {
            rule,
            kind: other.kind(),
        }),
    }
}

fn integer_bound(rule: &'static str, raw: &str) -> Result<i128, RuleError> {
    raw.parse::<i128>()
        .map_err(|source| RuleError::InvalidIntegerBound {
            rule,
            raw: raw.to_string(),
            source,
        })
}

/// Order the character count of a string value against the declared length.
fn compare_length(
    rule: &'static str,
    raw: &str,
    value: &Value<'_>,
) -> Result<Option<Ordering>, RuleError> {
    let Some(text) = as_text(rule, value)? else {
        return Ok(None);
    };
    if is_empty(value) {
        return Ok(None);
    }

    let bound = raw
        .parse::<usize>()
        .map_err(|source| RuleError::InvalidLength {
            rule,
            raw: raw.to_string(),
            source,
        })?;

    Ok(Some(text.chars().count().cmp(&bound)))
}

/// The string behind a value, looking through set optionals.
fn as_text<'v>(rule: &'static str, value: &'v Value<'_>) -> Result<Option<&'v str>, RuleError> {
    match value {
        Value::Str(text) => Ok(Some(*text)),
        Value::Optional(Some(inner)) => as_text(rule, inner),
        Value::Optional(None) => Ok(None),
        other => Err(RuleError::KindMismatch {
            rule,
            kind: other.kind(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleFn;
    use crate::core::AsValue;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn run(
        rule: RuleFn,
        declaration: &str,
        value: Value<'_>,
    ) -> Vec<Violation> {
        rule(&Constraints::parse(declaration), &value, "Width", Vec::new(), "")
    }

    fn width(constraint: &str) -> Vec<Violation> {
        vec![Violation::new("Width", constraint)]
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `check` and return whatever it logged.
    fn logged(check: impl FnOnce()) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, check);

        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn max_on_integers() {
        assert!(run(max, "max=3", 3i64.as_value()).is_empty());
        assert!(run(max, "max=3", 2i64.as_value()).is_empty());
        assert_eq!(run(max, "max=3", 4i64.as_value()), width("max"));
    }

    #[test]
    fn max_on_floats() {
        assert!(run(max, "max=3", 3.0f64.as_value()).is_empty());
        assert!(run(max, "max=3", 2.0f64.as_value()).is_empty());
        assert_eq!(run(max, "max=3", 4.0f64.as_value()), width("max"));
    }

    #[test]
    fn min_on_floats_and_integers() {
        assert!(run(min, "min=1", 1.0f64.as_value()).is_empty());
        assert!(run(min, "min=0", 1.0f64.as_value()).is_empty());
        assert_eq!(run(min, "min=2", 1.0f64.as_value()), width("min"));
        assert_eq!(run(min, "min=0", (-1i32).as_value()), width("min"));
    }

    #[test]
    fn unsigned_fields_compare_against_negative_bounds() {
        assert!(run(min, "min=-5", 0u64.as_value()).is_empty());
        assert_eq!(run(max, "max=-1", 0u8.as_value()), width("max"));
        assert_eq!(run(max, "max=10", u64::MAX.as_value()), width("max"));
    }

    #[test]
    fn integer_field_with_decimal_bound_is_skipped() {
        assert!(run(max, "max=90.0", 135i64.as_value()).is_empty());
    }

    #[test]
    fn unparsable_bound_is_skipped() {
        assert!(run(min, "min=abc", (-10.0f64).as_value()).is_empty());
        assert!(run(max_length, "maxlength=three", "abcdef".as_value()).is_empty());
    }

    #[test]
    fn numeric_rules_ignore_other_kinds() {
        assert!(run(min, "min=5", "abc".as_value()).is_empty());
        assert!(run(max, "max=0", true.as_value()).is_empty());
    }

    #[test]
    fn numeric_rules_check_set_optionals() {
        assert_eq!(run(max, "max=90", Some(135i64).as_value()), width("max"));
        assert!(run(max, "max=90", None::<i64>.as_value()).is_empty());
    }

    #[test]
    fn nan_never_violates_bounds() {
        assert!(run(min, "min=0", f64::NAN.as_value()).is_empty());
        assert!(run(max, "max=0", f64::NAN.as_value()).is_empty());
    }

    #[test]
    fn required_fires_only_when_true_and_empty() {
        assert_eq!(run(required, "required=true", "".as_value()), width("required"));
        assert!(run(required, "required=true", "x".as_value()).is_empty());
        assert!(run(required, "required=false", "".as_value()).is_empty());
        assert!(run(required, "required=true", 0i32.as_value()).is_empty());
        assert_eq!(
            run(required, "required=true", None::<f64>.as_value()),
            width("required")
        );
    }

    #[test]
    fn rules_ignore_fields_without_their_key() {
        let value = "".as_value();
        let rules: [RuleFn; 6] = [required, min, max, pattern, max_length, min_length];
        for rule in rules {
            assert!(run(rule, "other=1", value.clone()).is_empty());
        }
    }

    #[test]
    fn max_length_scenarios() {
        assert!(run(max_length, "maxlength=3", "one".as_value()).is_empty());
        assert!(run(max_length, "maxlength=4", "one".as_value()).is_empty());
        assert_eq!(run(max_length, "maxlength=2", "one".as_value()), width("maxlength"));
    }

    #[test]
    fn min_length_scenarios() {
        assert!(run(min_length, "minlength=1", "T".as_value()).is_empty());
        assert_eq!(run(min_length, "minlength=4", "one".as_value()), width("minlength"));
        // empty strings are left to `required`
        assert!(run(min_length, "minlength=1", "".as_value()).is_empty());
    }

    #[test]
    fn lengths_count_characters() {
        assert!(run(max_length, "maxlength=3", "äöü".as_value()).is_empty());
        assert_eq!(run(max_length, "maxlength=2", "äöü".as_value()), width("maxlength"));
    }

    #[test]
    fn length_rules_skip_non_strings() {
        assert!(run(max_length, "maxlength=1", 12345i64.as_value()).is_empty());
        assert!(run(min_length, "minlength=9", vec![1, 2].as_value()).is_empty());
    }

    #[test]
    fn pattern_requires_full_match() {
        assert!(run(pattern, "pattern=N|S", "N".as_value()).is_empty());
        assert_eq!(run(pattern, "pattern=N|S", "NE".as_value()), width("pattern"));
        assert_eq!(run(pattern, "pattern=[0-9]+", "a12".as_value()), width("pattern"));
    }

    #[test]
    fn pattern_checks_empty_strings() {
        assert_eq!(run(pattern, "pattern=N|S", "".as_value()), width("pattern"));
    }

    #[test]
    fn invalid_pattern_counts_as_violation() {
        assert_eq!(run(pattern, "pattern=(", "anything".as_value()), width("pattern"));
    }

    #[test]
    fn unbalanced_pattern_counts_as_violation() {
        // wrapped as `^(?:N)|(S)$` this would compile and match "Nxyz"
        assert_eq!(run(pattern, "pattern=N)|(S", "Nxyz".as_value()), width("pattern"));
        assert_eq!(run(pattern, "pattern=N)|(S", "N".as_value()), width("pattern"));
    }

    #[test]
    fn repeated_pattern_checks_agree() {
        for _ in 0..3 {
            assert!(run(pattern, "pattern=[A-Z]{3}", "USA".as_value()).is_empty());
            assert_eq!(run(pattern, "pattern=[A-Z]{3}", "US".as_value()), width("pattern"));
        }
    }

    #[test]
    fn kind_mismatch_on_empty_values_is_logged() {
        let mut violations = Vec::new();
        let logs = logged(|| {
            violations.extend(run(min, "min=1", "".as_value()));
            violations.extend(run(max_length, "maxlength=3", false.as_value()));
            violations.extend(run(pattern, "pattern=N|S", 0i64.as_value()));
        });

        assert!(violations.is_empty());
        assert!(logs.contains("min cannot be applied to a string field"), "{logs}");
        assert!(logs.contains("maxlength cannot be applied to a bool field"), "{logs}");
        assert!(logs.contains("pattern cannot be applied to a signed integer field"), "{logs}");
    }

    #[test]
    fn unset_optionals_are_skipped_silently() {
        let logs = logged(|| {
            assert!(run(min, "min=1", None::<i64>.as_value()).is_empty());
            assert!(run(max_length, "maxlength=3", None::<String>.as_value()).is_empty());
        });
        assert!(!logs.contains("skipping rule"), "{logs}");
    }

    #[test]
    fn pattern_skips_unset_optionals_and_non_strings() {
        assert!(run(pattern, "pattern=N|S", None::<String>.as_value()).is_empty());
        assert!(run(pattern, "pattern=N|S", 7i32.as_value()).is_empty());
        assert_eq!(
            run(pattern, "pattern=N|S", Some("W".to_string()).as_value()),
            width("pattern")
        );
    }

    #[test]
    fn violations_use_qualified_path_and_keep_existing_entries() {
        let existing = vec![Violation::new("Person.FirstName", "required")];
        let result = max(
            &Constraints::parse("max=90"),
            &135.0f64.as_value(),
            "Degrees",
            existing,
            "Person.Address.Location.Latitude",
        );

        assert_eq!(
            result,
            vec![
                Violation::new("Person.FirstName", "required"),
                Violation::new("Person.Address.Location.Latitude.Degrees", "max"),
            ]
        );
    }
}
