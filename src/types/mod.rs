//! Chain state types.
//!
//! The handling chain itself lives here, together with its claim-set
//! bookkeeping.
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! error_kinds! {
//!     enum TaskKind { Cancelled: checked, Panicked: unchecked }
//! }
//! # #[derive(Debug, PartialEq)]
//! # struct TaskError(TaskKind);
//! # impl KindedError for TaskError {
//! #     type Kind = TaskKind;
//! #     fn kind(&self) -> TaskKind { self.0 }
//! # }
//!
//! let value = handle(|| Ok::<_, TaskError>("done"))
//!     .resolve_invoking_unclaimed(|_| {});
//! assert_eq!(value, Some("done"));
//! ```
use smallvec::SmallVec;

pub mod claim_set;
pub mod handler_chain;

pub use claim_set::ClaimSet;
pub use handler_chain::{handle, HandlerChain};

/// SmallVec-backed collection used for the claimed-kind set.
///
/// Uses inline storage for up to 4 kinds to avoid heap allocations; chains
/// rarely name more kinds than that.
pub type KindVec<K> = SmallVec<[K; 4]>;
