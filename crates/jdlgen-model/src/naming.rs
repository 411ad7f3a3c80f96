//! Naming convention utilities for generated artifacts.
//!
//! Every function here is referentially transparent: the same input always
//! yields the same output, which keeps package, table and column names stable
//! across runs.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `PascalCase` | [`to_snake_case`] | `pascal_case` |
//! | `camelCase` | [`to_upper_snake_case`] | `CAMEL_CASE` |

/// Convert PascalCase or camelCase to snake_case.
///
/// An underscore is inserted only where a lower-case ASCII letter is directly
/// followed by an upper-case one, so acronyms stay joined.
///
/// ```
/// use jdlgen_model::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("BookAuthor"), "book_author");
/// assert_eq!(to_snake_case("HTTPServer"), "httpserver");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(s).to_lowercase()
}

/// Convert PascalCase or camelCase to UPPER_SNAKE_CASE.
///
/// ```
/// use jdlgen_model::naming::to_upper_snake_case;
///
/// assert_eq!(to_upper_snake_case("createdAt"), "CREATED_AT");
/// ```
pub fn to_upper_snake_case(s: &str) -> String {
    split_words(s).to_uppercase()
}

fn split_words(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut previous_lower = false;

    for c in s.chars() {
        if previous_lower && c.is_ascii_uppercase() {
            result.push('_');
        }
        previous_lower = c.is_ascii_lowercase();
        result.push(c);
    }

    result
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
