/// Errors that can occur during URL parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed scheme separator (`scheme:/x` without the second slash)
    InvalidScheme,
    /// Unterminated or invalid bracketed IPv6 literal
    InvalidIpv6,
    /// Caller-supplied buffer too small for the parsed components
    BufferTooSmall,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidScheme => "Invalid scheme separator",
            Self::InvalidIpv6 => "Invalid IPv6 literal",
            Self::BufferTooSmall => "Buffer too small",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
