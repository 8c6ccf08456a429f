//! Passwords common enough to be penalized outright

/// Compared against the lower-cased candidate
pub const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "qwerty",
    "admin",
    "abc123",
    "letmein",
    "monkey",
    "123456789",
];

/// Case-insensitive exact match against [`COMMON_PASSWORDS`]
pub fn is_common(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| *common == lowered)
}
