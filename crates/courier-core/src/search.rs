//! Contact search.
//!
//! Plain case-insensitive substring matching on contact names. Not fuzzy:
//! "son" matches "Alex Johnson" but nothing in "Sofia Davis".

use crate::models::Contact;

/// Check if `text` contains `term`, ignoring ASCII case. An empty term
/// matches everything.
pub fn text_contains_term(text: &str, term: &str) -> bool {
    let text_chars: Vec<char> = text.chars().collect();
    let term_chars: Vec<char> = term.chars().collect();

    if term_chars.is_empty() {
        return true;
    }

    if text_chars.len() < term_chars.len() {
        return false;
    }

    for start_idx in 0..=(text_chars.len() - term_chars.len()) {
        let matches = term_chars.iter().enumerate().all(|(i, tc)| {
            text_chars
                .get(start_idx + i)
                .is_some_and(|c| c.eq_ignore_ascii_case(tc))
        });
        if matches {
            return true;
        }
    }
    false
}

/// Filter contacts whose name contains `term`, preserving input order.
/// An empty term returns the full slice unchanged.
pub fn filter_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|c| text_contains_term(&c.name, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Contact> {
        vec![
            Contact::new(1, "Sofia Davis", "2h"),
            Contact::new(2, "Alex Johnson", "45m"),
            Contact::new(3, "Maria Gonzalez", "1h"),
        ]
    }

    #[test]
    fn test_empty_term_returns_all_in_order() {
        let contacts = roster();
        let filtered = filter_contacts(&contacts, "");
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Sofia Davis", "Alex Johnson", "Maria Gonzalez"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let contacts = roster();
        let filtered = filter_contacts(&contacts, "SOFIA");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);

        let filtered = filter_contacts(&contacts, "gonz");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
    }

    #[test]
    fn test_substring_not_fuzzy() {
        let contacts = roster();
        // "son" is a literal substring of "Johnson" and of nothing else.
        let filtered = filter_contacts(&contacts, "son");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alex Johnson");

        // A subsequence that is not a contiguous substring must not match.
        assert!(filter_contacts(&contacts, "sfa").is_empty());
    }

    #[test]
    fn test_no_match() {
        let contacts = roster();
        assert!(filter_contacts(&contacts, "zzz").is_empty());
    }

    #[test]
    fn test_text_contains_term() {
        assert!(text_contains_term("Hello World", "hello"));
        assert!(text_contains_term("Hello World", "WORLD"));
        assert!(text_contains_term("Hello World", "lo Wo"));
        assert!(!text_contains_term("Hello World", "xyz"));
        assert!(text_contains_term("Hello World", ""));
        assert!(!text_contains_term("Hi", "Hello"));
    }
}
