use crate::utils::error::{KataError, Result};

const KATA: &str = "alphabet_replace";

/// Replaces every letter with its 1-based alphabet position, joined by single spaces.
///
/// Spaces are dropped entirely. Any other non-letter is rejected.
pub fn alphabet_replace(text: &str) -> Result<String> {
    let mut positions = Vec::with_capacity(text.len());

    for (index, ch) in text.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        if !ch.is_ascii_alphabetic() {
            return Err(KataError::invalid_argument(
                KATA,
                format!("'{}' at position {} is not a letter", ch, index),
            ));
        }
        let position = ch.to_ascii_lowercase() as u8 - b'a' + 1;
        positions.push(position.to_string());
    }

    Ok(positions.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_alphabet_replace() {
        assert_eq!(alphabet_replace("cab").unwrap(), "3 1 2");
        assert_eq!(alphabet_replace("az").unwrap(), "1 26");
    }

    #[test]
    fn test_alphabet_replace_drops_spaces() {
        assert_eq!(alphabet_replace("a b").unwrap(), "1 2");
        assert_eq!(alphabet_replace("  a   b  ").unwrap(), "1 2");
        assert_eq!(alphabet_replace("   ").unwrap(), "");
        assert_eq!(alphabet_replace("").unwrap(), "");
    }

    #[test]
    fn test_alphabet_replace_is_case_insensitive() {
        assert_eq!(alphabet_replace("Hello World").unwrap(), "8 5 12 12 15 23 15 18 12 4");
        assert_eq!(alphabet_replace("CAB").unwrap(), alphabet_replace("cab").unwrap());
    }

    #[test]
    fn test_alphabet_replace_rejects_non_letters() {
        for text in ["abc!", "r2d2", "tab\there", "café"] {
            let err = alphabet_replace(text).unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InvalidArgument, "{}", text);
        }
    }

    #[test]
    fn test_alphabet_replace_reports_position() {
        let err = alphabet_replace("ab?").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }
}
