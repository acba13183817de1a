//! Errors that expose a runtime kind.
//!
//! [`KindedError`] is the seam between a host error type and the handling
//! chain: the chain never looks at an error's representation, only at the
//! [`ErrorKind`] value this trait hands back.
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! error_kinds! {
//!     enum FetchKind {
//!         Timeout: checked,
//!         Protocol: unchecked,
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct FetchError {
//!     kind: FetchKind,
//!     url: &'static str,
//! }
//!
//! impl KindedError for FetchError {
//!     type Kind = FetchKind;
//!     fn kind(&self) -> FetchKind {
//!         self.kind
//!     }
//! }
//!
//! let err = FetchError { kind: FetchKind::Timeout, url: "https://example.com" };
//! assert_eq!(err.kind(), FetchKind::Timeout);
//! ```

use crate::traits::error_kind::ErrorKind;
#[cfg(feature = "std")]
use crate::traits::error_kind::KindCategory;

/// An error value that exposes its runtime kind.
///
/// The associated `Kind` carries the identity, subtype relation, and category
/// the chain matches against. One error type usually pairs with one kind enum;
/// the error keeps whatever payload it likes (messages, sources, codes) and
/// the chain never touches it.
pub trait KindedError {
    /// Kind vocabulary for this error type.
    type Kind: ErrorKind;

    /// The kind of this particular error value.
    fn kind(&self) -> Self::Kind;
}

/// Flat, checked kind vocabulary for standard I/O errors.
///
/// `std::io::ErrorKind` values have no parent/child structure, and I/O
/// failures are the textbook anticipated failure, so every kind is `Checked`.
#[cfg(feature = "std")]
impl ErrorKind for std::io::ErrorKind {
    #[inline]
    fn category(&self) -> KindCategory {
        KindCategory::Checked
    }
}

#[cfg(feature = "std")]
impl KindedError for std::io::Error {
    type Kind = std::io::ErrorKind;

    #[inline]
    fn kind(&self) -> std::io::ErrorKind {
        std::io::Error::kind(self)
    }
}
