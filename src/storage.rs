//! Allocation strategies for the backing buffer of an owned [`Uri`].
//!
//! Every successful [`Uri::parse_with`] asks its strategy for exactly one
//! buffer, sized to hold the full string and all NUL-terminated components.
//! Structural errors are detected before the strategy is consulted.
//!
//! [`Uri`]: crate::Uri
//! [`Uri::parse_with`]: crate::Uri::parse_with
use crate::compat::String;

/// Provides the single buffer backing a parsed [`Uri`](crate::Uri).
///
/// Implementations return an empty `String` with capacity for at least
/// `capacity` bytes, or `None` to refuse. A refusal surfaces as
/// [`ParseError::AllocationFailure`](crate::ParseError::AllocationFailure).
///
/// Any `Fn(usize) -> Option<String>` is a strategy:
///
/// ```
/// use uriparts::{Uri, UriBase};
///
/// let uri = Uri::parse_with("s://h/p", &|capacity: usize| {
///     Some(String::with_capacity(capacity))
/// })?;
/// assert_eq!(uri.host(), "h");
/// # Ok::<_, uriparts::ParseError>(())
/// ```
pub trait BufferAlloc {
    fn allocate(&self, capacity: usize) -> Option<String>;
}

/// The global allocator, reporting failure instead of aborting.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl BufferAlloc for Global {
    fn allocate(&self, capacity: usize) -> Option<String> {
        let mut buffer = String::new();
        buffer.try_reserve_exact(capacity).ok()?;
        Some(buffer)
    }
}

/// Refuses buffers larger than the given number of bytes, then defers to
/// [`Global`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxCapacity(pub usize);

impl BufferAlloc for MaxCapacity {
    fn allocate(&self, capacity: usize) -> Option<String> {
        if capacity > self.0 {
            return None;
        }
        Global.allocate(capacity)
    }
}

impl<F> BufferAlloc for F
where
    F: Fn(usize) -> Option<String>,
{
    fn allocate(&self, capacity: usize) -> Option<String> {
        self(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_reserves_capacity() {
        let buffer = Global.allocate(64);
        assert!(buffer.as_ref().is_some_and(|b| b.is_empty()));
        assert!(buffer.is_some_and(|b| b.capacity() >= 64));
    }

    #[test]
    fn test_global_refuses_impossible_capacity() {
        assert!(Global.allocate(usize::MAX).is_none());
    }

    #[test]
    fn test_max_capacity() {
        assert!(MaxCapacity(16).allocate(16).is_some());
        assert!(MaxCapacity(16).allocate(17).is_none());
    }

    #[test]
    fn test_closure_strategy() {
        let refuse = |_: usize| -> Option<String> { None };
        assert!(refuse.allocate(1).is_none());
    }
}
