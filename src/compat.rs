/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
#[allow(unused_imports, reason = "some re-exports are only used by tests")]
pub use std::{
    format,
    string::{String, ToString},
    vec::Vec,
};

#[cfg(not(feature = "std"))]
#[allow(unused_imports, reason = "some re-exports are only used by tests")]
pub use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
