//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_switch::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`error_kinds!`]
//! - **Types**: [`HandlerChain`], [`KindCategory`]
//! - **Traits**: [`ErrorKind`], [`KindedError`], [`ResultHandleExt`]
//! - **Functions**: [`handle`]
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! error_kinds! {
//!     enum LookupKind { Missing: checked, Corrupt: unchecked }
//! }
//! # #[derive(Debug, PartialEq)]
//! # struct LookupError(LookupKind);
//! # impl KindedError for LookupError {
//! #     type Kind = LookupKind;
//! #     fn kind(&self) -> LookupKind { self.0 }
//! # }
//!
//! let outcome = handle(|| Err::<u32, _>(LookupError(LookupKind::Missing)))
//!     .resolve_invoking(|err| eprintln!("lookup failed: {err:?}"), &[LookupKind::Missing]);
//! assert_eq!(outcome, Ok(None));
//! ```

// Macros
pub use crate::error_kinds;

// Core types
pub use crate::types::HandlerChain;

// Traits and vocabulary
pub use crate::traits::{ErrorKind, KindCategory, KindedError, ResultHandleExt};

// Entry point
pub use crate::types::handle;
