//! Extension trait with convenience additions for `str`.

use unicode_segmentation::UnicodeSegmentation;

/// Empty string constant.
pub const EMPTY: &str = "";

/// Serialized form of an empty JSON object.
pub const EMPTY_JSON_OBJECT: &str = "{}";

/// Serialized form of an empty JSON array.
pub const EMPTY_JSON_ARRAY: &str = "[]";

/// Convenience additions for string slices.
///
/// Character-indexed operations work on user-perceived characters
/// (extended grapheme clusters), not bytes.
pub trait StrAdditions {
    /// Returns the number of user-perceived characters.
    fn char_count(&self) -> usize;

    /// Returns the string with user-perceived characters in reverse order.
    fn reversed(&self) -> String;

    /// Returns the user-perceived characters as owned strings.
    fn char_strings(&self) -> Vec<String>;

    /// Returns whether the string contains `needle`, ignoring case.
    fn contains_ignoring_case(&self, needle: &str) -> bool;

    /// Returns a copy keeping only the characters present in `allowed`.
    fn removing_all_characters_except(&self, allowed: &str) -> String;

    /// Returns a copy with the first occurrence of `from` replaced by `to`.
    ///
    /// The string is returned unchanged when `from` does not occur.
    fn replacing_first_occurrence(&self, from: &str, to: &str) -> String;

    /// Returns the suffix starting at the given character index.
    fn substring_from(&self, index: usize) -> String;

    /// Returns the prefix ending before the given character index.
    fn substring_to(&self, index: usize) -> String;

    /// Returns the string percent-encoded for use in a URL query.
    fn url_encoded(&self) -> String;
}

impl StrAdditions for str {
    fn char_count(&self) -> usize {
        self.graphemes(true).count()
    }

    fn reversed(&self) -> String {
        self.graphemes(true).rev().collect()
    }

    fn char_strings(&self) -> Vec<String> {
        self.graphemes(true).map(str::to_owned).collect()
    }

    fn contains_ignoring_case(&self, needle: &str) -> bool {
        self.to_lowercase().contains(&needle.to_lowercase())
    }

    fn removing_all_characters_except(&self, allowed: &str) -> String {
        self.chars().filter(|c| allowed.contains(*c)).collect()
    }

    fn replacing_first_occurrence(&self, from: &str, to: &str) -> String {
        match self.find(from) {
            Some(start) => {
                let mut result = String::with_capacity(self.len());
                result.push_str(&self[..start]);
                result.push_str(to);
                result.push_str(&self[start + from.len()..]);
                result
            }
            None => self.to_owned(),
        }
    }

    fn substring_from(&self, index: usize) -> String {
        self.graphemes(true).skip(index).collect()
    }

    fn substring_to(&self, index: usize) -> String {
        self.graphemes(true).take(index).collect()
    }

    fn url_encoded(&self) -> String {
        urlencoding::encode(self).into_owned()
    }
}

/// Joins the given lines with a separator.
pub fn joined_lines(separator: &str, lines: &[&str]) -> String {
    lines.join(separator)
}

/// Renders a byte slice as an uppercase hexadecimal string.
pub fn hex_string(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_and_strings() {
        assert_eq!("héllo".char_count(), 5);
        assert_eq!("a👍b".char_strings(), vec!["a", "👍", "b"]);
        assert_eq!("".char_count(), 0);
    }

    #[test]
    fn test_reversed() {
        assert_eq!("abc".reversed(), "cba");
        // Grapheme clusters survive reversal intact.
        assert_eq!("a👍b".reversed(), "b👍a");
    }

    #[test]
    fn test_contains_ignoring_case() {
        assert!("Hello World".contains_ignoring_case("WORLD"));
        assert!("Hello World".contains_ignoring_case("lo wo"));
        assert!(!"Hello".contains_ignoring_case("bye"));
    }

    #[test]
    fn test_removing_all_characters_except() {
        assert_eq!(
            "1a2b3c".removing_all_characters_except("0123456789"),
            "123"
        );
        assert_eq!("#FF00AA".removing_all_characters_except("0123456789ABCDEF"), "FF00AA");
    }

    #[test]
    fn test_replacing_first_occurrence() {
        assert_eq!("one two one".replacing_first_occurrence("one", "1"), "1 two one");
        assert_eq!("no match".replacing_first_occurrence("xyz", "1"), "no match");
    }

    #[test]
    fn test_substrings() {
        assert_eq!("abcdef".substring_from(2), "cdef");
        assert_eq!("abcdef".substring_to(2), "ab");
        assert_eq!("abc".substring_from(10), "");
    }

    #[test]
    fn test_url_encoded() {
        assert_eq!("a b&c".url_encoded(), "a%20b%26c");
    }

    #[test]
    fn test_joined_lines() {
        assert_eq!(joined_lines("\n", &["one", "two", "three"]), "one\ntwo\nthree");
        assert_eq!(joined_lines(", ", &[]), "");
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(hex_string(&[0x00, 0xAB, 0xFF]), "00ABFF");
        assert_eq!(hex_string(&[]), "");
    }
}
