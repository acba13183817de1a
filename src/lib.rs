//! Kind-aware handling chains for fallible operations.
//!
//! `error-switch` runs a fallible computation exactly once, captures its
//! outcome, and lets the caller route different error kinds to different
//! handlers — rethrow as another error, or invoke a side effect — before
//! resolving to the computation's value or propagating an error. Each kind is
//! handled at most once per chain, and unexpected kinds are not silently
//! swallowed: unclaimed `Unchecked` failures escape through every terminal
//! that is not itself a catch-all.
//!
//! The host error system plugs in through two small traits: [`KindedError`]
//! (an error exposes its kind) and [`ErrorKind`] (kind identity, a strict
//! subtype relation, and a `Checked`/`Unchecked` category). The
//! [`error_kinds!`] macro generates both the kind enum and its relation from
//! one block.
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! error_kinds! {
//!     /// Failure kinds for a small document store.
//!     enum StoreKind {
//!         Storage: unchecked,
//!         Corrupt: unchecked < Storage,
//!         Missing: checked,
//!         Denied: checked,
//!     }
//! }
//!
//! #[derive(Debug, PartialEq)]
//! struct StoreError {
//!     kind: StoreKind,
//! }
//!
//! impl KindedError for StoreError {
//!     type Kind = StoreKind;
//!     fn kind(&self) -> StoreKind {
//!         self.kind
//!     }
//! }
//!
//! fn fetch(id: u32) -> Result<&'static str, StoreError> {
//!     match id {
//!         7 => Ok("report.txt"),
//!         0 => Err(StoreError { kind: StoreKind::Denied }),
//!         _ => Err(StoreError { kind: StoreKind::Missing }),
//!     }
//! }
//!
//! fn describe(id: u32) -> Result<Option<&'static str>, StoreError> {
//!     handle(|| fetch(id))
//!         .invoke_for(|err| eprintln!("access denied: {err:?}"), &[StoreKind::Denied])
//!         .resolve_rethrowing(|err| err, &[StoreKind::Missing])
//! }
//!
//! assert_eq!(describe(7), Ok(Some("report.txt")));
//! assert_eq!(describe(0), Ok(None)); // Denied was invoked and absorbed
//! assert!(describe(1).is_err()); // Missing was rethrown
//! ```
//!
//! A chain that only anticipated checked kinds still lets unexpected failures
//! out:
//!
//! ```
//! # use error_switch::prelude::*;
//! # error_kinds! {
//! #     enum StoreKind {
//! #         Storage: unchecked,
//! #         Corrupt: unchecked < Storage,
//! #         Missing: checked,
//! #     }
//! # }
//! # #[derive(Debug, PartialEq)]
//! # struct StoreError {
//! #     kind: StoreKind,
//! # }
//! # impl KindedError for StoreError {
//! #     type Kind = StoreKind;
//! #     fn kind(&self) -> StoreKind { self.kind }
//! # }
//! let outcome = handle(|| Err::<(), _>(StoreError { kind: StoreKind::Corrupt }))
//!     .resolve_invoking(|_| {}, &[StoreKind::Missing]);
//!
//! // No handler named Corrupt and it is unchecked, so it escapes unconverted.
//! assert_eq!(outcome.unwrap_err().kind, StoreKind::Corrupt);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

/// Macro for declaring error-kind vocabularies
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: kind identity, kinded errors, Result integration
pub mod traits;
/// The handling chain and its claim bookkeeping
pub mod types;

pub use traits::{ErrorKind, KindCategory, KindedError, ResultHandleExt};
pub use types::{handle, ClaimSet, HandlerChain, KindVec};
