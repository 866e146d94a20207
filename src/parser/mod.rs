pub(crate) mod scan;

use crate::error::Result;

/// Trait for types that can be parsed from URI strings
pub trait Parseable<'a>: Sized {
    /// Parse from input string
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`](crate::ParseError) if `input` is not a URI.
    fn parse(input: &'a str) -> Result<Self>;
}

/// Parse a URI string into either [`Uri`](crate::Uri) or
/// [`UriRef`](crate::UriRef)
///
/// # Errors
///
/// Returns a [`ParseError`](crate::ParseError) if `input` is not a URI.
pub fn parse<'a, T: Parseable<'a>>(input: &'a str) -> Result<T> {
    T::parse(input)
}
