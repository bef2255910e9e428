//! Color parsing errors.

/// Error returned when a `#RRGGBB` color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidColorFormat {
    /// The string does not start with `#`.
    MissingPrefix,
    /// The part after `#` is not exactly six digits long.
    WrongLength { found: usize },
    /// A character after `#` is not a hexadecimal digit.
    InvalidDigit { found: char },
}

impl std::fmt::Display for InvalidColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidColorFormat::MissingPrefix => {
                write!(f, "color string must start with '#'")
            }
            InvalidColorFormat::WrongLength { found } => {
                write!(f, "expected 6 hex digits after '#', found {}", found)
            }
            InvalidColorFormat::InvalidDigit { found } => {
                write!(f, "invalid hex digit '{}' in color string", found)
            }
        }
    }
}

impl std::error::Error for InvalidColorFormat {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prefix_display() {
        let msg = InvalidColorFormat::MissingPrefix.to_string();
        assert!(msg.contains('#'));
    }

    #[test]
    fn test_wrong_length_display() {
        let msg = InvalidColorFormat::WrongLength { found: 3 }.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('6'));
    }

    #[test]
    fn test_invalid_digit_display() {
        let msg = InvalidColorFormat::InvalidDigit { found: 'z' }.to_string();
        assert!(msg.contains('z'));
    }
}
