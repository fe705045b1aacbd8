use std::cmp::Ordering;

/// Case-insensitive substring test.
/// The needle must already be lowercased; callers normalize the query once
/// per search instead of once per field.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive ordering without allocation.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Главный корпус", "главный"));
        assert!(contains_ignore_case("Главный корпус", "корпус"));
        assert!(contains_ignore_case("Library", "lib"));
        assert!(!contains_ignore_case("Стадион", "корпус"));
    }

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("abc", "ABC"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("Кафе", "кафе"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("abc", "abd"), Ordering::Less);
        assert_eq!(cmp_ignore_case("b", "A"), Ordering::Greater);
    }
}
