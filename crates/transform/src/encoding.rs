//! Output value encoding

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// How emitted credential values are encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldEncoding {
    #[default]
    Plain,
    /// Standard alphabet, padded
    Base64,
}

impl FieldEncoding {
    pub fn from_flag(to_base64: bool) -> Self {
        if to_base64 {
            FieldEncoding::Base64
        } else {
            FieldEncoding::Plain
        }
    }

    pub fn apply(&self, value: &str) -> String {
        match self {
            FieldEncoding::Plain => value.to_string(),
            FieldEncoding::Base64 => STANDARD.encode(value.as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_is_identity() {
        assert_eq!(FieldEncoding::Plain.apply("secret"), "secret");
    }

    #[test]
    fn test_base64_is_padded_standard() {
        assert_eq!(FieldEncoding::Base64.apply("CERT"), "Q0VSVA==");
        assert_eq!(FieldEncoding::Base64.apply("a?b>"), "YT9iPg==");
        assert_eq!(FieldEncoding::Base64.apply(""), "");
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(FieldEncoding::from_flag(true), FieldEncoding::Base64);
        assert_eq!(FieldEncoding::from_flag(false), FieldEncoding::Plain);
    }
}
