use crate::error::Result;
use crate::parser::Parseable;
use crate::parser::scan::{scan, until_nul};
use crate::storage::{BufferAlloc, Global};
use crate::uri::Uri;
use crate::uri_base::UriBase;
use crate::uri_components::UriComponents;

/// A parsed URI borrowing its input.
///
/// Parsing a `UriRef` never allocates; components are slices of the
/// original string. Convert to an owned [`Uri`] with [`UriRef::to_uri`].
///
/// # Examples
///
/// ```
/// use uriparts::{UriBase, UriRef};
///
/// let uri = UriRef::parse("myapp://oauth?code=abc")?;
/// assert_eq!(uri.scheme(), "myapp");
/// assert_eq!(uri.host(), "oauth");
/// assert_eq!(uri.query_param("code"), Some("abc"));
/// # Ok::<_, uriparts::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UriRef<'a> {
    input: &'a str,
    components: UriComponents,
}

impl<'a> UriRef<'a> {
    /// Parse `input` without allocating.
    ///
    /// Input after the first NUL byte is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MissingScheme`](crate::ParseError::MissingScheme),
    /// [`InvalidHost`](crate::ParseError::InvalidHost) or
    /// [`InvalidPort`](crate::ParseError::InvalidPort).
    pub fn parse(input: &'a str) -> Result<Self> {
        let components = scan(input)?;
        Ok(Self {
            input: until_nul(input),
            components,
        })
    }

    pub(crate) fn from_parts(input: &'a str, components: UriComponents) -> Self {
        Self { input, components }
    }

    /// The full URI with the lifetime of the input
    pub fn into_str(self) -> &'a str {
        self.input
    }

    /// Copy into an owned [`Uri`] using the global allocator.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailure`](crate::ParseError::AllocationFailure)
    /// if the buffer cannot be allocated.
    pub fn to_uri(&self) -> Result<Uri> {
        self.to_uri_in(&Global)
    }

    /// Copy into an owned [`Uri`] whose buffer comes from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationFailure`](crate::ParseError::AllocationFailure)
    /// if `alloc` refuses.
    pub fn to_uri_in<A: BufferAlloc + ?Sized>(&self, alloc: &A) -> Result<Uri> {
        Uri::assemble(self.input, &self.components, alloc)
    }
}

impl UriBase for UriRef<'_> {
    fn buffer(&self) -> &str {
        self.input
    }

    fn components(&self) -> &UriComponents {
        &self.components
    }
}

impl<'a> Parseable<'a> for UriRef<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        Self::parse(input)
    }
}

impl core::fmt::Display for UriRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
