//! Kind identity, subtype relation, and category classification.
//!
//! This module provides the [`ErrorKind`] trait, the vocabulary a host error
//! system supplies so that a [`HandlerChain`](crate::HandlerChain) can match
//! failures without ever inspecting their representation: kind equality, a
//! strict-descendant relation, and a [`KindCategory`] tag read by the
//! terminal escape check.
//!
//! # Examples
//!
//! ```
//! use error_switch::{ErrorKind, KindCategory};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! enum QueueKind {
//!     Shutdown,
//!     Full,
//! }
//!
//! impl ErrorKind for QueueKind {
//!     fn category(&self) -> KindCategory {
//!         match self {
//!             QueueKind::Shutdown => KindCategory::Unchecked,
//!             QueueKind::Full => KindCategory::Checked,
//!         }
//!     }
//! }
//!
//! assert!(QueueKind::Shutdown.category().is_unchecked());
//! assert!(!QueueKind::Full.is_strict_descendant_of(&QueueKind::Full));
//! ```

use core::fmt::Debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category tag attached to every error kind.
///
/// The category decides what a terminal chain method does with a failure that
/// no handler matched: `Checked` kinds are absorbed, `Unchecked` kinds escape
/// through the terminal unconverted (unless already claimed earlier in the
/// chain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KindCategory {
    /// An anticipated failure. Absorbed by a terminal method unless a handler
    /// names it or [`allow_unsafe_escape`](crate::HandlerChain::allow_unsafe_escape)
    /// was called.
    Checked,
    /// An escapes-by-default failure. Re-raised by the terminal escape check
    /// unless some earlier step already claimed its kind.
    Unchecked,
}

impl KindCategory {
    /// Returns `true` for [`KindCategory::Checked`].
    #[inline]
    pub fn is_checked(&self) -> bool {
        matches!(self, KindCategory::Checked)
    }

    /// Returns `true` for [`KindCategory::Unchecked`].
    #[inline]
    pub fn is_unchecked(&self) -> bool {
        matches!(self, KindCategory::Unchecked)
    }
}

/// The runtime identity of a captured error.
///
/// A kind is a small `Copy` value the host error system attaches to each
/// error. The chain compares kinds by equality for exact matches and consults
/// [`is_strict_descendant_of`](ErrorKind::is_strict_descendant_of) for parent
/// matches. The relation and the category are read-only to the chain.
///
/// Most hosts should not implement this by hand: the
/// [`error_kinds!`](crate::error_kinds) macro generates an enum together with
/// its category table and parent edges.
///
/// # Guidelines
///
/// Tag as `Unchecked`:
/// - programming errors (invalid arguments, broken invariants)
/// - failures no caller can meaningfully anticipate
///
/// Tag as `Checked`:
/// - failures every caller is expected to consider (I/O, parsing, lookups)
pub trait ErrorKind: Copy + PartialEq + Debug {
    /// Category tag read by the terminal escape check.
    fn category(&self) -> KindCategory;

    /// Whether `self` is a strict descendant of `parent`.
    ///
    /// Must never hold when `self == parent`. The default is a flat
    /// hierarchy with no descendants.
    #[inline]
    fn is_strict_descendant_of(&self, parent: &Self) -> bool {
        let _ = parent;
        false
    }
}
