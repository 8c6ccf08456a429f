//! Character classes shared by the scorer and the generator

use crate::types::CharPool;

/// The 30 symbols counted as "special" by the scorer and used by the generator.
/// No backtick: the set holds exactly as many symbols as its pool weight.
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/~";

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// A character class contributing to the brute-force alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII a-z
    Lowercase,
    /// ASCII A-Z
    Uppercase,
    /// ASCII 0-9
    Digit,
    /// One of [`SPECIAL_SYMBOLS`]
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL_SYMBOLS,
        }
    }

    /// Number of characters in the class
    pub fn size(&self) -> u32 {
        match self {
            CharClass::Lowercase | CharClass::Uppercase => 26,
            CharClass::Digit => 10,
            CharClass::Special => 30,
        }
    }

    /// Non-ASCII characters belong to no class.
    pub fn contains(&self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => SPECIAL_SYMBOLS.contains(c),
        }
    }
}

/// Sum the sizes of every class with at least one character in `password`
pub fn classify(password: &str) -> CharPool {
    let mut pool = CharPool::EMPTY;
    for class in CharClass::ALL {
        if password.chars().any(|c| class.contains(c)) {
            pool.add(class.size());
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes_match_tables() {
        for class in CharClass::ALL {
            assert_eq!(class.chars().chars().count() as u32, class.size());
        }
    }

    #[test]
    fn test_special_set_matches_pool_weight() {
        let distinct: std::collections::HashSet<char> = SPECIAL_SYMBOLS.chars().collect();
        assert_eq!(SPECIAL_SYMBOLS.chars().count(), 30);
        assert_eq!(distinct.len() as u32, CharClass::Special.size());
        assert!(!CharClass::Special.contains('`'));
        assert_eq!(classify("`").size(), 0);
    }

    #[test]
    fn test_classify_single_classes() {
        assert_eq!(classify("hello").size(), 26);
        assert_eq!(classify("HELLO").size(), 26);
        assert_eq!(classify("2024").size(), 10);
        assert_eq!(classify("!?").size(), 30);
    }

    #[test]
    fn test_classify_all_classes() {
        assert_eq!(classify("aA1!").size(), 92);
        assert_eq!(classify("Tr0ub4dor&3").size(), 92);
    }

    #[test]
    fn test_non_ascii_counts_for_nothing() {
        assert_eq!(classify("ñandú").size(), 26);
        assert_eq!(classify("日本語").size(), 0);
        assert_eq!(classify("").size(), 0);
        // whitespace and backslash are outside the special set
        assert_eq!(classify(" \\\t").size(), 0);
    }
}
