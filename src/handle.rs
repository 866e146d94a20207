//! Handle-style API: `create` returns `None` on any error, `destroy`
//! releases a handle and leaves `None` behind.
//!
//! ```
//! use uriparts::UriBase;
//! use uriparts::handle::{create, destroy};
//!
//! let mut uri = create("myapp://oauth?code=abc");
//! assert_eq!(uri.as_ref().map(|u| u.host()), Some("oauth"));
//!
//! destroy(&mut uri);
//! destroy(&mut uri); // no-op
//! assert!(uri.is_none());
//! ```
use crate::uri::Uri;

/// Parse `input`, discarding the reason on failure.
pub fn create(input: &str) -> Option<Uri> {
    Uri::parse(input).ok()
}

/// Release the URI held by `handle`, if any.
pub fn destroy(handle: &mut Option<Uri>) {
    drop(handle.take());
}
