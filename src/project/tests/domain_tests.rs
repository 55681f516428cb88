//! Unit tests for project priority normalization and parsing.

use crate::normalize::CanonicalValue;
use crate::project::domain::{ParsePriorityError, ProjectPriority};
use rstest::rstest;

#[rstest]
#[case("domain.High", ProjectPriority::High)]
#[case("high", ProjectPriority::High)]
#[case("HIGH", ProjectPriority::High)]
#[case("High", ProjectPriority::High)]
#[case("domain.Medium", ProjectPriority::Medium)]
#[case("medium", ProjectPriority::Medium)]
#[case("MEDIUM", ProjectPriority::Medium)]
#[case("domain.Low", ProjectPriority::Low)]
#[case("low", ProjectPriority::Low)]
#[case("LOW", ProjectPriority::Low)]
#[case(" Medium ", ProjectPriority::Medium)]
fn recognized_aliases_normalize_to_canonical_priority(
    #[case] raw: &str,
    #[case] expected: ProjectPriority,
) {
    assert_eq!(ProjectPriority::normalize(raw), expected);
}

#[rstest]
#[case("")]
#[case("urgent")]
#[case("hi")]
#[case("domain.Urgent")]
#[case("p1")]
fn unrecognized_input_falls_back_to_low(#[case] raw: &str) {
    assert_eq!(ProjectPriority::normalize(raw), ProjectPriority::Low);
}

#[rstest]
#[case(ProjectPriority::High)]
#[case(ProjectPriority::Medium)]
#[case(ProjectPriority::Low)]
fn normalization_is_idempotent(#[case] priority: ProjectPriority) {
    assert_eq!(ProjectPriority::normalize(priority.as_str()), priority);
}

#[test]
fn strict_parse_rejects_unknown_labels() {
    assert_eq!(
        ProjectPriority::try_from("HIGH"),
        Err(ParsePriorityError("HIGH".to_owned()))
    );
    assert_eq!(ProjectPriority::try_from("High"), Ok(ProjectPriority::High));
}
