//! Error types for XYZ parsing
//!
//! `parse` collapses every variant here into `ParseResult::Invalid`; the
//! enumerated causes are only surfaced through `parse_detailed`.

use thiserror::Error;

/// Reasons an XYZ text fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XyzError {
    /// The first line is not a base-10 atom count
    #[error("Malformed atom count on line 1: '{0}'")]
    MalformedCount(String),

    /// Fewer lines than the header plus the declared atom count
    #[error("Truncated body: {declared} atoms declared, {found} lines present (need {required})")]
    TruncatedBody {
        /// Declared atom count
        declared: i64,
        /// Lines present in the text
        found: usize,
        /// Lines required (`declared + 2`)
        required: i64,
    },

    /// A body line has fewer than four whitespace-separated tokens
    #[error("Malformed atom line {line}: expected 'element x y z', got '{content}'")]
    MalformedLine {
        /// Line number (1-based)
        line: usize,
        /// Raw line content
        content: String,
    },

    /// A coordinate token is not a finite real number
    #[error("Non-numeric {axis} coordinate on line {line}: '{token}'")]
    NonNumericCoordinate {
        /// Line number (1-based)
        line: usize,
        /// Axis name (`x`, `y` or `z`)
        axis: char,
        /// Offending token
        token: String,
    },
}

impl XyzError {
    /// Create a malformed line error
    pub fn malformed_line(line: usize, content: impl Into<String>) -> Self {
        XyzError::MalformedLine {
            line,
            content: content.into(),
        }
    }

    /// Create a non-numeric coordinate error
    pub fn non_numeric(line: usize, axis: char, token: impl Into<String>) -> Self {
        XyzError::NonNumericCoordinate {
            line,
            axis,
            token: token.into(),
        }
    }
}

/// Result type for XYZ parsing
pub type XyzResult<T> = Result<T, XyzError>;
