//! Alias-table normalization for enum-valued request fields.
//!
//! Client input for status and priority fields arrives in whatever casing and
//! spelling the caller happened to use. Each canonical enum declares a single
//! alias table; lookups compare case-insensitively after trimming surrounding
//! whitespace and fall back to the enum's lowest-severity value when nothing
//! matches. Normalization never fails.

/// An enum with a fixed set of canonical spellings and a fallback value.
pub trait CanonicalValue: Copy + Sized + 'static {
    /// Recognized spellings and the canonical value each one maps to.
    ///
    /// Entries are compared with [`str::eq_ignore_ascii_case`], so listing
    /// one casing of each alias is sufficient.
    const ALIASES: &'static [(&'static str, Self)];

    /// Value used when the input matches no alias.
    const FALLBACK: Self;

    /// Returns the canonical spelling, also used as the storage label.
    fn as_str(self) -> &'static str;

    /// Maps free-form input onto a canonical value.
    #[must_use]
    fn normalize(raw: &str) -> Self {
        lookup(Self::ALIASES, raw).unwrap_or(Self::FALLBACK)
    }
}

/// Finds the canonical value for `raw` in an alias table.
///
/// Returns `None` when no alias matches.
#[must_use]
pub fn lookup<T: Copy>(aliases: &[(&str, T)], raw: &str) -> Option<T> {
    let candidate = raw.trim();
    aliases
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(candidate))
        .map(|&(_, value)| value)
}

/// Normalizes a request field in place and returns the typed value.
///
/// The field is overwritten with the canonical spelling so callers holding the
/// request observe the same value that reaches storage.
pub fn normalize_field<T: CanonicalValue>(field: &mut String) -> T {
    let value = T::normalize(field);
    if field != value.as_str() {
        field.clear();
        field.push_str(value.as_str());
    }
    value
}

#[cfg(test)]
mod tests {
    use super::{CanonicalValue, lookup, normalize_field};
    use rstest::rstest;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Level {
        Quiet,
        Loud,
    }

    impl CanonicalValue for Level {
        const ALIASES: &'static [(&'static str, Self)] = &[
            ("Quiet", Self::Quiet),
            ("sys.Quiet", Self::Quiet),
            ("Loud", Self::Loud),
            ("Very Loud", Self::Loud),
        ];
        const FALLBACK: Self = Self::Quiet;

        fn as_str(self) -> &'static str {
            match self {
                Self::Quiet => "Quiet",
                Self::Loud => "Loud",
            }
        }
    }

    #[rstest]
    #[case("loud", Some(Level::Loud))]
    #[case("LOUD", Some(Level::Loud))]
    #[case("  very loud ", Some(Level::Loud))]
    #[case("SYS.QUIET", Some(Level::Quiet))]
    #[case("louder", None)]
    #[case("", None)]
    fn lookup_compares_case_insensitively(#[case] raw: &str, #[case] expected: Option<Level>) {
        assert_eq!(lookup(Level::ALIASES, raw), expected);
    }

    #[test]
    fn normalize_falls_back_for_unknown_input() {
        assert_eq!(Level::normalize("whisper"), Level::Quiet);
    }

    #[test]
    fn normalize_field_rewrites_with_canonical_spelling() {
        let mut field = "VERY LOUD".to_owned();
        let value: Level = normalize_field(&mut field);
        assert_eq!(value, Level::Loud);
        assert_eq!(field, "Loud");
    }

    #[test]
    fn normalize_field_replaces_empty_input_with_fallback() {
        let mut field = String::new();
        let value: Level = normalize_field(&mut field);
        assert_eq!(value, Level::Quiet);
        assert_eq!(field, "Quiet");
    }
}
