/// Errors reported by the strict query parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `%` not followed by two hex digits, at this byte offset of the input
    InvalidPercentEncoding { position: usize },
    /// Percent-decoded bytes are not valid UTF-8
    InvalidUtf8,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidPercentEncoding { position } => {
                write!(f, "Invalid percent encoding at byte {position}")
            }
            Self::InvalidUtf8 => f.write_str("Invalid UTF-8 in decoded query"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for strict query parsing
pub type Result<T> = core::result::Result<T, ParseError>;
