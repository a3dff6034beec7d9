//! Genre-name normalization.
//!
//! Genre names are unique regardless of letter case. Names are lowered here
//! before being bound, and every query still compares against `LOWER(name)`
//! so the storage-side comparison stays case-insensitive on its own.

/// Lowercase a genre name for binding against `LOWER(genres.name)`.
///
/// No trimming is performed: `" Drama"` does not match `"Drama"`.
pub fn normalize_genre_name(name: &str) -> String {
    name.to_lowercase()
}

/// Normalize a list of genre names, dropping case-insensitive duplicates.
///
/// The first occurrence of each name wins, so the output preserves input order.
pub fn normalize_genre_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let normalized = normalize_genre_name(name.as_ref());
        if !out.contains(&normalized) {
            out.push(normalized);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_mixed_case() {
        assert_eq!(normalize_genre_name("Sci-Fi"), "sci-fi");
        assert_eq!(normalize_genre_name("DRAMA"), "drama");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(normalize_genre_name(" Drama "), " drama ");
    }

    #[test]
    fn dedupes_case_insensitively_in_order() {
        let names = ["Action", "Sci-Fi", "action", "SCI-FI", "Drama"];
        assert_eq!(
            normalize_genre_names(&names),
            vec!["action", "sci-fi", "drama"]
        );
    }

    #[test]
    fn empty_list_stays_empty() {
        let names: [&str; 0] = [];
        assert!(normalize_genre_names(&names).is_empty());
    }
}
