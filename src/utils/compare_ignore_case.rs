use std::cmp::Ordering;

/// Compares two words alphabetically, ignoring case.
///
/// Characters are lowercased one at a time, so no intermediate `String` is allocated. Words
/// which only differ by case compare as `Equal`.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
