/// Errors that can occur during URI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input is empty, has no `:` or has an empty scheme
    MissingScheme,
    /// IPv6 literal host (`[...`) without a closing `]`
    InvalidHost,
    /// Port separator without digits, or a port value out of range
    InvalidPort,
    /// The backing buffer could not be allocated
    AllocationFailure,
    /// Rendered buffer length disagrees with the computed layout
    InternalFormatError,
    /// C string input is not valid UTF-8
    InvalidEncoding,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "Missing scheme",
            Self::InvalidHost => "Invalid host",
            Self::InvalidPort => "Invalid port",
            Self::AllocationFailure => "Allocation failure",
            Self::InternalFormatError => "Internal format error",
            Self::InvalidEncoding => "Invalid encoding",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(not(feature = "std"))]
impl core::error::Error for ParseError {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_display() {
        assert_eq!(ParseError::MissingScheme.to_string(), "Missing scheme");
        assert_eq!(ParseError::InvalidPort.to_string(), "Invalid port");
        assert_eq!(
            ParseError::InternalFormatError.to_string(),
            "Internal format error"
        );
    }
}
