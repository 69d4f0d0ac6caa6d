//! Naming transforms for generated declarations.
//!
//! All transforms are deterministic and delimiter-driven: they split on `_`
//! and adjust segment-initial characters only. No transform ever case-folds
//! the interior of a segment, so inputs that differ in interior case stay
//! distinct (e.g., "aField" and "afield" never collide).

/// Convert a column name to a camelCase field name (e.g., "first_name" ->
/// "firstName").
///
/// The first retained segment keeps its interior verbatim with its first
/// character lowercased; later segments get their first character uppercased.
/// Empty segments are skipped, so "a__field" and "a_field" agree. An input of
/// only underscores has no segments and is returned unchanged.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for part in s.split('_').filter(|part| !part.is_empty()) {
        let mut chars = part.chars();
        match chars.next() {
            None => {}
            Some(c) if result.is_empty() => result.extend(c.to_lowercase().chain(chars)),
            Some(c) => result.extend(c.to_uppercase().chain(chars)),
        }
    }
    if result.is_empty() {
        return s.to_string();
    }
    result
}

/// Convert a table name to a declaration name (e.g., "TABLE_A" -> "Table_A").
///
/// Each underscore-separated segment is capitalized with its remainder
/// lowercased, and the underscores are kept in place.
pub fn to_class_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Uppercase the first character, leaving the rest verbatim (e.g.,
/// "loadAllPersons" -> "LoadAllPersons").
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("a_field"), "aField");
        assert_eq!(to_camel_case("theid"), "theid");
        assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_keeps_interior_case() {
        assert_eq!(to_camel_case("aField"), "aField");
        assert_eq!(to_camel_case("afield"), "afield");
        assert_eq!(to_camel_case("ID"), "iD");
        assert_eq!(to_camel_case("my_XMLParser"), "myXMLParser");
    }

    #[test]
    fn test_to_camel_case_skips_empty_segments() {
        assert_eq!(to_camel_case("a__field"), "aField");
        assert_eq!(to_camel_case("_leading"), "leading");
        assert_eq!(to_camel_case("trailing_"), "trailing");
    }

    #[test]
    fn test_to_camel_case_all_underscores_unchanged() {
        assert_eq!(to_camel_case("_"), "_");
        assert_eq!(to_camel_case("__"), "__");
    }

    #[test]
    fn test_to_class_case() {
        assert_eq!(to_class_case("person1"), "Person1");
        assert_eq!(to_class_case("TABLE_A"), "Table_A");
        assert_eq!(to_class_case("A_TABLE"), "A_Table");
        assert_eq!(to_class_case("content_types"), "Content_Types");
        assert_eq!(to_class_case(""), "");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("loadAllPersons"), "LoadAllPersons");
        assert_eq!(upper_first("delete"), "Delete");
        assert_eq!(upper_first("X"), "X");
        assert_eq!(upper_first(""), "");
    }
}
