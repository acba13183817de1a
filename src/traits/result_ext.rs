//! Extension trait for starting a handling chain from a `Result`.
//!
//! [`handle`](crate::handle) wraps a not-yet-run operation; in practice the
//! fallible call has often already happened and its `Result` is in hand.
//! [`ResultHandleExt::handled`] starts a chain from that value directly.
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! error_kinds! {
//!     enum ParseKind { Syntax: checked, Range: checked }
//! }
//! # #[derive(Debug)]
//! # struct ParseError(ParseKind);
//! # impl KindedError for ParseError {
//! #     type Kind = ParseKind;
//! #     fn kind(&self) -> ParseKind { self.0 }
//! # }
//!
//! fn parse(input: &str) -> Result<u32, ParseError> {
//!     input.parse().map_err(|_| ParseError(ParseKind::Syntax))
//! }
//!
//! let value = parse("17")
//!     .handled()
//!     .resolve_invoking_unclaimed(|err| eprintln!("ignored: {err:?}"));
//! assert_eq!(value, Some(17));
//! ```

use crate::traits::KindedError;
use crate::types::HandlerChain;

/// Adds [`handled`](ResultHandleExt::handled) to `Result`.
pub trait ResultHandleExt<T, E: KindedError> {
    /// Starts a handling chain whose outcome is this result.
    ///
    /// Equivalent to `HandlerChain::from_result(self)`; the operation is
    /// considered to have already run exactly once.
    fn handled(self) -> HandlerChain<T, E>;
}

impl<T, E: KindedError> ResultHandleExt<T, E> for Result<T, E> {
    #[inline]
    fn handled(self) -> HandlerChain<T, E> {
        HandlerChain::from_result(self)
    }
}
