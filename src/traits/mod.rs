//! Core traits: the seams between a host error system and the handling chain.
//!
//! - [`ErrorKind`]: kind identity, subtype relation, and category tag
//! - [`KindedError`]: an error value that exposes its kind
//! - [`ResultHandleExt`]: start a chain from an already-evaluated `Result`
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! error_kinds! {
//!     enum CacheKind { Miss: checked, Poisoned: unchecked }
//! }
//! # #[derive(Debug)]
//! # struct CacheError(CacheKind);
//! # impl KindedError for CacheError {
//! #     type Kind = CacheKind;
//! #     fn kind(&self) -> CacheKind { self.0 }
//! # }
//!
//! let chain = Err::<u32, _>(CacheError(CacheKind::Miss)).handled();
//! assert_eq!(chain.error_kind(), Some(CacheKind::Miss));
//! ```

pub mod error_kind;
pub mod kinded_error;
pub mod result_ext;

pub use error_kind::{ErrorKind, KindCategory};
pub use kinded_error::KindedError;
pub use result_ext::ResultHandleExt;
