//! Centralized name parsing for the `NN<sep>Name` ordering convention.
//!
//! Album folders and image files in Drive share one convention: an optional
//! numeric prefix, separated from the rest of the name by a run of
//! whitespace, hyphens, or underscores. The prefix controls display order
//! and is stripped from titles; the name also feeds slug generation for
//! album ids.
//!
//! - `01-Weddings` → order 1, title "Weddings"
//! - `02 - Portraits` → order 2, title "Portraits"
//! - `10_Classical Dance` → order 10, title "Classical Dance"
//! - `Candids` → no prefix; sorts after every numbered entry

/// Result of parsing a name like `01-Weddings`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Numeric prefix if present (`1` from `01-Weddings`).
    pub order: Option<u64>,
    /// Name with the prefix and separator stripped, trimmed. For unnumbered
    /// entries this is the full input, unchanged.
    pub title: String,
}

/// Parse an entry name following the `NN<sep>Name` convention.
///
/// A name is numbered when a leading digit run is followed by at least one
/// separator character and a non-empty remainder. A separator run that
/// reaches the end of the name yields its last character back to the title
/// (`"01---"` → order 1, title `"-"`), while `"01-"` has nothing left to
/// yield and stays unnumbered. A digit run too large for `u64` is treated
/// as unnumbered.
pub fn parse_entry_name(name: &str) -> ParsedName {
    let digits_end = name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(name.len());
    let (digits, rest) = name.split_at(digits_end);

    if !digits.is_empty()
        && let Ok(order) = digits.parse::<u64>()
    {
        let mut sep_end = 0;
        let mut last_sep_len = 0;
        for c in rest.chars() {
            if c.is_whitespace() || c == '-' || c == '_' {
                last_sep_len = c.len_utf8();
                sep_end += last_sep_len;
            } else {
                break;
            }
        }
        // The separator run may not swallow the whole remainder: the title
        // needs at least one character.
        if sep_end == rest.len() {
            sep_end -= last_sep_len;
        }
        if sep_end > 0 {
            return ParsedName {
                order: Some(order),
                title: rest[sep_end..].trim().to_string(),
            };
        }
    }

    ParsedName {
        order: None,
        title: name.to_string(),
    }
}

/// Derive a URL-friendly slug from an entry name.
///
/// Strips the order prefix, lowercases, drops everything that is not a
/// letter, digit, underscore, whitespace, or hyphen (Unicode letters and
/// digits survive), then collapses whitespace/hyphen runs into single
/// hyphens with none leading or trailing.
///
/// `slugify("01-Classical Dance!")` → `"classical-dance"`.
pub fn slugify(name: &str) -> String {
    let lowered = parse_entry_name(name).title.to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_sep = false;
    for c in lowered.chars() {
        if c.is_whitespace() || c == '-' {
            pending_sep = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c);
        }
        // Everything else (punctuation, symbols) is dropped outright.
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(order: Option<u64>, title: &str) -> ParsedName {
        ParsedName {
            order,
            title: title.to_string(),
        }
    }

    // =========================================================================
    // parse_entry_name() tests
    // =========================================================================

    #[test]
    fn hyphen_separator() {
        assert_eq!(parse_entry_name("01-Weddings"), parsed(Some(1), "Weddings"));
    }

    #[test]
    fn spaced_hyphen_separator() {
        assert_eq!(
            parse_entry_name("02 - Portraits"),
            parsed(Some(2), "Portraits")
        );
    }

    #[test]
    fn underscore_separator_keeps_inner_spaces() {
        assert_eq!(
            parse_entry_name("10_Classical Dance"),
            parsed(Some(10), "Classical Dance")
        );
    }

    #[test]
    fn bare_space_separator() {
        assert_eq!(
            parse_entry_name("2023 Wedding 01"),
            parsed(Some(2023), "Wedding 01")
        );
    }

    #[test]
    fn unnumbered_name_passes_through() {
        assert_eq!(parse_entry_name("Candids"), parsed(None, "Candids"));
    }

    #[test]
    fn digits_without_separator_are_not_a_prefix() {
        assert_eq!(parse_entry_name("2024photos"), parsed(None, "2024photos"));
    }

    #[test]
    fn pure_number_is_unnumbered() {
        assert_eq!(parse_entry_name("001"), parsed(None, "001"));
    }

    #[test]
    fn number_with_trailing_separator_only_is_unnumbered() {
        assert_eq!(parse_entry_name("01-"), parsed(None, "01-"));
    }

    #[test]
    fn separator_run_yields_last_char_to_title() {
        assert_eq!(parse_entry_name("01---"), parsed(Some(1), "-"));
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(
            parse_entry_name("01-  Weddings  "),
            parsed(Some(1), "Weddings")
        );
    }

    #[test]
    fn zero_prefix() {
        assert_eq!(parse_entry_name("000-First"), parsed(Some(0), "First"));
    }

    #[test]
    fn overlong_digit_run_is_unnumbered() {
        let name = "99999999999999999999999-x";
        assert_eq!(parse_entry_name(name), parsed(None, name));
    }

    // =========================================================================
    // slugify() tests
    // =========================================================================

    #[test]
    fn slug_strips_prefix_and_punctuation() {
        assert_eq!(slugify("01-Classical Dance!"), "classical-dance");
    }

    #[test]
    fn slug_is_idempotent() {
        let once = slugify("01-Classical Dance!");
        assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slug_collapses_mixed_separator_runs() {
        assert_eq!(slugify("03 - My   Best -- Photos"), "my-best-photos");
    }

    #[test]
    fn slug_has_no_leading_or_trailing_hyphens() {
        assert_eq!(slugify("  Weddings  "), "weddings");
        assert_eq!(slugify("-Weddings-"), "weddings");
    }

    #[test]
    fn slug_keeps_underscores_and_digits() {
        assert_eq!(slugify("04-studio_shots 2023"), "studio_shots-2023");
    }

    #[test]
    fn slug_keeps_unicode_letters() {
        assert_eq!(slugify("05-Café Münch"), "café-münch");
    }

    #[test]
    fn slug_of_unnumbered_name() {
        assert_eq!(slugify("Candids"), "candids");
    }

    #[test]
    fn slug_can_be_empty() {
        assert_eq!(slugify("!!!"), "");
    }
}
