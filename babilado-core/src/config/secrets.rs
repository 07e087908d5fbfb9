//! Secret handling and redaction for configuration
//!
//! Credentials never appear in Display or Debug output; logs that need to
//! confirm a credential was loaded use `partial_redact`.

use std::fmt;

/// A wrapper type for sensitive strings like API keys
#[derive(Clone)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    /// Create a new secret string
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the actual value (use with caution)
    pub fn expose_secret(&self) -> &str {
        &self.value
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get a partially redacted version for debugging
    pub fn partial_redact(&self) -> String {
        if self.value.is_empty() {
            return "[EMPTY]".to_string();
        }

        // Byte offsets can split a multi-byte character; work in chars.
        let count = self.value.chars().count();
        if count <= 8 {
            // Very short secrets get fully redacted
            "[REDACTED]".to_string()
        } else {
            // Show first 2 and last 2 characters
            let head: String = self.value.chars().take(2).collect();
            let tail: String = self.value.chars().skip(count - 2).collect();
            format!("{}...{}", head, tail)
        }
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_string_redaction() {
        let secret = SecretString::new("sk-1234567890abcdef");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(secret.partial_redact(), "sk...ef");
    }

    #[test]
    fn test_secret_string_expose() {
        let secret = SecretString::new("my-secret-value");
        assert_eq!(secret.expose_secret(), "my-secret-value");
    }

    #[test]
    fn test_partial_redact_edge_cases() {
        assert_eq!(SecretString::new("").partial_redact(), "[EMPTY]");
        assert_eq!(SecretString::new("short").partial_redact(), "[REDACTED]");
        assert_eq!(
            SecretString::new("a-much-longer-secret").partial_redact(),
            "a-...et"
        );
    }

    #[test]
    fn test_partial_redact_multibyte() {
        // Eight characters but ten bytes.
        assert_eq!(
            SecretString::new("AIzaSyD\u{2026}").partial_redact(),
            "[REDACTED]"
        );
        // Multi-byte characters at the revealed edges stay whole.
        assert_eq!(
            SecretString::new("AIzaSyDemo\u{2026}").partial_redact(),
            "AI...o\u{2026}"
        );
        assert_eq!(
            SecretString::new("\u{2026}AIzaSyDemo").partial_redact(),
            "\u{2026}A...mo"
        );
    }

    #[test]
    fn test_debug_in_containers_is_redacted() {
        let secret = Some(SecretString::new("sk-secret-api-key-123456"));
        let debug_output = format!("{:?}", secret);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk-secret-api-key-123456"));
    }
}
