//! Canonicalization of free-form finding labels.
//!
//! Every comparison in the engine happens on normalized labels; raw catalog
//! text and raw subject text are never compared directly. Callers that skip
//! normalization on either side will silently under-match.

/// Canonical form of a finding label: lower-cased, trimmed, curly apostrophes
/// unified with straight ones, internal whitespace collapsed to single spaces.
///
/// Total and idempotent; the empty string maps to the empty string.
pub fn normalize(label: &str) -> String {
    let unified = label.replace(['\u{2018}', '\u{2019}'], "'");
    let cleaned = unified.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn unifies_apostrophes_and_collapses_whitespace() {
        assert_eq!(
            normalize("Crow's Feet Wrinkles"),
            normalize("crow\u{2019}s   feet wrinkles")
        );
        assert_eq!(normalize("  Forehead\tWrinkles "), "forehead wrinkles");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["", "  ", "Crow\u{2019}s Feet", "NASOLABIAL  Folds", "\u{feff}Jawline"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "normalize must be idempotent for {raw:?}");
        }
    }

    #[test]
    fn empty_string_maps_to_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }
}
