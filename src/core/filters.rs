use crate::models::Named;

/// Normalise an optional name filter
///
/// Absent and empty filters both mean "no filtering". The returned needle is
/// lowercased once so it can be reused across candidates.
pub fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(str::to_lowercase)
}

/// Case-insensitive substring match on a candidate's name
#[inline]
pub fn matches_name<C: Named + ?Sized>(candidate: &C, needle_lower: &str) -> bool {
    candidate.name().to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label(&'static str);

    impl Named for Label {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_normalize_filter() {
        assert_eq!(normalize_filter(None), None);
        assert_eq!(normalize_filter(Some("")), None);
        assert_eq!(normalize_filter(Some("Ward")), Some("ward".to_string()));
        // Whitespace is a real filter, not an empty one
        assert_eq!(normalize_filter(Some(" ")), Some(" ".to_string()));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let facility = Label("NHS CHERRY WARD");
        assert!(matches_name(&facility, "cherry"));
        assert!(matches_name(&facility, "nhs c"));
        assert!(!matches_name(&facility, "juniper"));
    }
}
