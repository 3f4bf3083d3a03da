//! # Nested Optional
//! The `nested_optional` crate provides [`Optional`], a container that may or may not hold a value
//! of an arbitrary type. Values are inspected and transformed through combinators (`exists`,
//! `map`, `map_or_else`, `value_or`, ...), and an `Optional` can be wrapped inside another one with
//! [`wrap`]. Every combinator, as well as serialization, sees through any number of wrapping layers
//! down to the innermost value, which [`unwrap`] resolves directly.
//!
//! An `Optional` is a shared handle: cloning it or wrapping it aliases the same container, so a
//! mutation performed through a wrapper is observed through the original.
//!
//! ```
//! use nested_optional::{unwrap, wrap, Optional};
//!
//! let greeting = Optional::new(String::new());
//! let wrapped = wrap(&wrap(&greeting));
//!
//! wrapped.map(|g| g.push_str("hello"));
//! assert_eq!(unwrap(&greeting).as_deref(), Some("hello"));
//! ```

#![allow(clippy::module_inception)]
#![no_std]

extern crate alloc;

// Only needed for printing location logs
#[cfg(feature = "std")]
extern crate std;

// Stub used when printing is unavailable.
// Macros are exported at crate root level, that's why they are defined here.
#[cfg(not(feature = "std"))]
#[macro_export]
macro_rules! println {
    () => {{}};
    ($($arg:tt)*) => {{}};
}

#[cfg(not(feature = "std"))]
#[macro_export]
macro_rules! print {
    () => {{}};
    ($($arg:tt)*) => {{}};
}

// Reexport macro at the same level as `no_std`.
#[cfg(feature = "std")]
pub use std::{print, println};

#[cfg(not(feature = "err-location-log"))]
pub const LOCATION_LOG: bool = false;

#[cfg(feature = "err-location-log")]
pub const LOCATION_LOG: bool = true;

/// Logs the location of an error when the `err-location-log` feature is enabled, then evaluates to
/// the error itself.
#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        if $crate::LOCATION_LOG {
            $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!());
        }
        $err
    }};
}

/// The [`Optional`] container, its combinators and the wrap/unwrap composition layer.
pub mod optional;

/// JSON encoding conveniences
#[cfg(feature = "json")]
mod json;

/// Errors specific for JSON encoding
#[cfg(feature = "json")]
pub mod error;

pub use optional::{
    compose::{unwrap, wrap},
    flatten::{FlattenPolicy, KeepZero, SkipZero},
    Optional,
};

#[cfg(feature = "json")]
pub use error::{Error, Result};
