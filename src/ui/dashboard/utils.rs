//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::ui::navigation::IconKind;

/// Uppercased first letters of the name's tokens, at most two.
///
/// An empty or all-whitespace name yields an empty string; that is the
/// avatar fallback, not an error.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

/// Resolve a symbolic icon key to its terminal glyph.
pub fn icon_glyph(icon: IconKind) -> &'static str {
    match icon {
        IconKind::Home => "⌂",
        IconKind::QrCode => "▦",
        IconKind::Calendar => "▤",
        IconKind::User => "☺",
        IconKind::Star => "★",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_two_names() {
        assert_eq!(initials("Jane Doe"), "JD");
    }

    #[test]
    fn test_initials_single_name() {
        assert_eq!(initials("Madonna"), "M");
    }

    #[test]
    fn test_initials_empty_name() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    // Long names truncate to two characters.
    fn test_initials_truncates_to_two() {
        assert_eq!(initials("Maria Clara dela Cruz"), "MC");
    }

    #[test]
    fn test_initials_uppercases() {
        assert_eq!(initials("jane doe"), "JD");
    }
}
