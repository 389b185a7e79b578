// src/name.rs

//! Canonical name handling for cookbook entries
//!
//! Every name that reaches the cookbook passes through [`normalize`] first,
//! so equality and uniqueness in the store are always defined over the
//! canonical form, never over raw input.
//!
//! Normalization rules, applied in order:
//! 1. Hyphens and underscores become spaces
//! 2. Everything that is not an ASCII letter or whitespace is dropped
//! 3. Words are capitalized (first letter upper, rest lower) and rejoined
//!    with single spaces, which also trims and collapses whitespace
//! 4. An empty result is invalid
//!
//! Examples: `"tomato-soup_2"` -> `"Tomato Soup"`, `"123!!!"` -> invalid.

use std::fmt;
use thiserror::Error;

/// A normalized cookbook name.
///
/// Invariant: non-empty, ASCII letters and single interior spaces only,
/// every word capitalized. Values are produced only by [`normalize`], so
/// holding a `CanonicalName` is proof the invariant holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Get the canonical form as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error returned when a raw name normalizes to nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("name {0:?} is empty after normalization")]
pub struct InvalidName(pub String);

/// Normalize a raw label into the cookbook's canonical key format.
///
/// Pure and deterministic; the only failure mode is a name that contains
/// no letters at all.
pub fn normalize(raw: &str) -> Result<CanonicalName, InvalidName> {
    // Steps 1 and 2 in one pass: separators become spaces, everything
    // that is neither a letter nor whitespace is dropped.
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '-' | '_' => cleaned.push(' '),
            c if c.is_ascii_alphabetic() || c.is_whitespace() => cleaned.push(c),
            _ => {}
        }
    }

    // Step 3: capitalize each word and rejoin with single spaces.
    // split_whitespace drops empty words, so this also collapses runs
    // and trims the ends.
    let mut canonical = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !canonical.is_empty() {
            canonical.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            canonical.push(first.to_ascii_uppercase());
            for rest in chars {
                canonical.push(rest.to_ascii_lowercase());
            }
        }
    }

    if canonical.is_empty() {
        return Err(InvalidName(raw.to_string()));
    }

    Ok(CanonicalName(canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize("tomato-soup_2").unwrap().as_str(), "Tomato Soup");
    }

    #[test]
    fn test_normalize_whitespace_runs() {
        assert_eq!(
            normalize("  multiple   spaces ").unwrap().as_str(),
            "Multiple Spaces"
        );
    }

    #[test]
    fn test_normalize_capitalization() {
        assert_eq!(normalize("bEEF wellINGTON").unwrap().as_str(), "Beef Wellington");
    }

    #[test]
    fn test_normalize_strips_non_letters() {
        assert_eq!(normalize("egg42!").unwrap().as_str(), "Egg");
    }

    #[test]
    fn test_normalize_empty_after_stripping() {
        assert!(normalize("123!!!").is_err());
        assert!(normalize("").is_err());
        assert!(normalize("   ").is_err());
        assert!(normalize("---___").is_err());
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["tomato-soup_2", "  multiple   spaces ", "Plain Name", "a_b-c"] {
            let once = normalize(raw).unwrap();
            let twice = normalize(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_display_matches_canonical_form() {
        let name = normalize("pad_thai").unwrap();
        assert_eq!(name.to_string(), "Pad Thai");
    }
}
