//! Expression error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    // Lexical errors
    #[error("Unrecognized symbol: '{symbol}' at position {position}")]
    Lexical { symbol: char, position: usize },

    #[error("Expected floating point value, but numeral is malformed: {numeral}")]
    MalformedNumeral { numeral: String },

    // Grammar errors
    #[error("Malformed expression at {position}: {message}")]
    Structural { message: String, position: usize },

    #[error("Expression nesting exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl ExprError {
    pub fn structural(message: impl Into<String>, position: usize) -> Self {
        ExprError::Structural {
            message: message.into(),
            position,
        }
    }

    pub fn malformed(numeral: impl Into<String>) -> Self {
        ExprError::MalformedNumeral {
            numeral: numeral.into(),
        }
    }

    /// Short category name, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            ExprError::Lexical { .. } => "lexical",
            ExprError::MalformedNumeral { .. } => "malformed_numeral",
            ExprError::Structural { .. } => "structural",
            ExprError::DepthLimitExceeded { .. } => "depth_limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = ExprError::Lexical {
            symbol: 'x',
            position: 3,
        };
        assert_eq!(err.kind(), "lexical");
        assert_eq!(ExprError::malformed("1.2.3").kind(), "malformed_numeral");
        assert_eq!(ExprError::structural("empty", 0).kind(), "structural");
        assert_eq!(
            ExprError::DepthLimitExceeded { limit: 4 }.kind(),
            "depth_limit"
        );
    }

    #[test]
    fn test_error_display() {
        let err = ExprError::malformed("1.2.3");
        assert_eq!(
            err.to_string(),
            "Expected floating point value, but numeral is malformed: 1.2.3"
        );

        let err = ExprError::Lexical {
            symbol: 'a',
            position: 1,
        };
        assert_eq!(err.to_string(), "Unrecognized symbol: 'a' at position 1");
    }
}
