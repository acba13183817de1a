use tracing::warn;

use crate::traits::{ErrorKind, KindedError};
use crate::types::ClaimSet;

/// A handling chain over the outcome of a fallible operation run exactly once.
///
/// `HandlerChain` captures a `Result` and lets the caller attach per-kind
/// handlers before resolving to the success value or propagating an error.
/// Non-terminal steps hand the chain back for further chaining (raising, in
/// Rust, means returning `Err`, so the fallible steps compose with `?`);
/// exactly one terminal `resolve_*` method consumes the chain.
///
/// # Matching
///
/// - *Exact* steps match when the failure's kind equals one of the candidate
///   kinds. Candidates are registered in the claim set up front, and a
///   candidate some earlier step already claimed triggers a `tracing` warning
///   (control flow is unaffected).
/// - *Parent* steps match when the failure's kind is a **strict** descendant
///   of the given parent and has not been claimed yet; on match the failure's
///   own kind is claimed. A kind claimed earlier is excluded from later
///   parent matches but stays eligible for exact matches.
///
/// # Escape check
///
/// A terminal method that did not match runs the escape check before yielding
/// the value slot: an unclaimed failure whose kind is
/// [`Unchecked`](crate::KindCategory::Unchecked) — or any unclaimed failure
/// once [`allow_unsafe_escape`](Self::allow_unsafe_escape) was called — is
/// returned as the original error, unconverted. This keeps a chain that only
/// anticipated checked kinds from silently absorbing an unexpected failure.
/// The `*_unclaimed` terminals are themselves the catch-all and skip the
/// check.
///
/// # Examples
///
/// ```
/// use error_switch::prelude::*;
///
/// error_kinds! {
///     /// Failure kinds for a config loader.
///     enum ConfigKind {
///         Internal: unchecked,
///         BadValue: unchecked < Internal,
///         MissingFile: checked,
///         Syntax: checked,
///     }
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct ConfigError(ConfigKind);
///
/// impl KindedError for ConfigError {
///     type Kind = ConfigKind;
///     fn kind(&self) -> ConfigKind {
///         self.0
///     }
/// }
///
/// fn load() -> Result<&'static str, ConfigError> {
///     Err(ConfigError(ConfigKind::Syntax))
/// }
///
/// fn settings() -> Result<Option<&'static str>, ConfigError> {
///     handle(load)
///         .invoke_for(|err| eprintln!("syntax problem: {err:?}"), &[ConfigKind::Syntax])
///         .resolve_rethrowing(|_| ConfigError(ConfigKind::MissingFile), &[ConfigKind::MissingFile])
/// }
///
/// // Syntax was handled by the invoke step and absorbed by the terminal.
/// assert_eq!(settings(), Ok(None));
/// ```
#[must_use]
#[derive(Debug)]
pub struct HandlerChain<T, E: KindedError> {
    outcome: Result<T, E>,
    claimed: ClaimSet<E::Kind>,
    escape_unsafe: bool,
}

/// Runs `op` exactly once and starts a handling chain over its outcome.
///
/// Construction itself never fails: a failure is captured into the chain and
/// waits for the handler steps.
///
/// # Examples
///
/// ```
/// use error_switch::prelude::*;
///
/// error_kinds! {
///     enum JobKind { Io: checked, Parse: checked }
/// }
/// # #[derive(Debug, PartialEq)]
/// # struct JobError(JobKind);
/// # impl KindedError for JobError {
/// #     type Kind = JobKind;
/// #     fn kind(&self) -> JobKind { self.0 }
/// # }
///
/// let value = handle(|| Ok::<_, JobError>(7))
///     .resolve_invoking_unclaimed(|_| {});
/// assert_eq!(value, Some(7));
/// ```
#[inline]
pub fn handle<T, E, F>(op: F) -> HandlerChain<T, E>
where
    E: KindedError,
    F: FnOnce() -> Result<T, E>,
{
    HandlerChain::from_result(op())
}

impl<T, E: KindedError> HandlerChain<T, E> {
    /// Starts a chain over an already-evaluated outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked }
    /// }
    /// # #[derive(Debug)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// let chain = HandlerChain::from_result(Err::<u32, _>(JobError(JobKind::Io)));
    /// assert!(chain.is_failure());
    /// # let _ = chain.resolve_invoking_unclaimed(|_| {});
    /// ```
    #[inline]
    pub fn from_result(outcome: Result<T, E>) -> Self {
        Self {
            outcome,
            claimed: ClaimSet::new(),
            escape_unsafe: false,
        }
    }

    /// Returns `true` if the wrapped operation completed normally.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Returns `true` if the wrapped operation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.outcome.is_err()
    }

    /// The kind of the captured failure, if any.
    #[inline]
    pub fn error_kind(&self) -> Option<E::Kind> {
        match &self.outcome {
            Err(error) => Some(error.kind()),
            Ok(_) => None,
        }
    }

    /// Raises the original captured error if its kind is exactly `kind`.
    ///
    /// The kind is registered as claimed whether or not it matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked, Parse: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// fn run() -> Result<Option<u32>, JobError> {
    ///     let chain = handle(|| Err::<u32, _>(JobError(JobKind::Parse)))
    ///         .rethrow_for(JobKind::Parse)?;
    ///     Ok(chain.resolve_invoking_unclaimed(|_| {}))
    /// }
    ///
    /// assert_eq!(run().unwrap_err().kind(), JobKind::Parse);
    /// ```
    pub fn rethrow_for(mut self, kind: E::Kind) -> Result<Self, E> {
        let matched = self.claim_and_match(&[kind]);
        match self.outcome {
            Err(error) if matched => Err(error),
            outcome => Ok(Self {
                outcome,
                claimed: self.claimed,
                escape_unsafe: self.escape_unsafe,
            }),
        }
    }

    /// Raises `map(error)` if the failure's kind is exactly one of `kinds`.
    ///
    /// All candidate kinds are registered as claimed up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked, Parse: checked, Rejected: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// fn run() -> Result<Option<u32>, JobError> {
    ///     let chain = handle(|| Err::<u32, _>(JobError(JobKind::Io)))
    ///         .rethrow_mapped_for(|_| JobError(JobKind::Rejected), &[JobKind::Io, JobKind::Parse])?;
    ///     Ok(chain.resolve_invoking_unclaimed(|_| {}))
    /// }
    ///
    /// assert_eq!(run().unwrap_err().kind(), JobKind::Rejected);
    /// ```
    pub fn rethrow_mapped_for<M>(mut self, map: M, kinds: &[E::Kind]) -> Result<Self, E>
    where
        M: FnOnce(E) -> E,
    {
        let matched = self.claim_and_match(kinds);
        match self.outcome {
            Err(error) if matched => Err(map(error)),
            outcome => Ok(Self {
                outcome,
                claimed: self.claimed,
                escape_unsafe: self.escape_unsafe,
            }),
        }
    }

    /// Raises `map(error)` if the failure's kind is a strict descendant of
    /// `parent` and has not been claimed yet.
    ///
    /// On match the failure's own kind is registered as claimed. The parent
    /// kind itself never matches.
    pub fn rethrow_mapped_for_parent<M>(mut self, map: M, parent: E::Kind) -> Result<Self, E>
    where
        M: FnOnce(E) -> E,
    {
        let matched = self.parent_claim(&parent);
        match self.outcome {
            Err(error) if matched => Err(map(error)),
            outcome => Ok(Self {
                outcome,
                claimed: self.claimed,
                escape_unsafe: self.escape_unsafe,
            }),
        }
    }

    /// Calls `handler` with the captured error if its kind is exactly one of
    /// `kinds`, then hands the chain back.
    ///
    /// All candidate kinds are registered as claimed up front. An empty
    /// candidate list matches nothing here; the empty-means-any rule belongs
    /// to the terminal methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked, Parse: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// let mut seen = None;
    /// let chain = handle(|| Err::<u32, _>(JobError(JobKind::Io)))
    ///     .invoke_for(|err| seen = Some(err.kind()), &[JobKind::Io, JobKind::Parse]);
    /// assert_eq!(seen, Some(JobKind::Io));
    ///
    /// // Io is claimed now, so the leftover terminal stays quiet.
    /// assert_eq!(chain.resolve_invoking_unclaimed(|_| unreachable!()), None);
    /// ```
    pub fn invoke_for<H>(mut self, handler: H, kinds: &[E::Kind]) -> Self
    where
        H: FnOnce(&E),
    {
        if self.claim_and_match(kinds) {
            if let Err(error) = &self.outcome {
                handler(error);
            }
        }
        self
    }

    /// Calls `handler` with the captured error if its kind is a strict
    /// descendant of `parent` and has not been claimed yet.
    ///
    /// On match the failure's own kind is registered as claimed.
    pub fn invoke_for_parent<H>(mut self, handler: H, parent: E::Kind) -> Self
    where
        H: FnOnce(&E),
    {
        if self.parent_claim(&parent) {
            if let Err(error) = &self.outcome {
                handler(error);
            }
        }
        self
    }

    /// Allows the terminal escape check to propagate checked failures too.
    ///
    /// Never matches or raises by itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked, Parse: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// // Without the escape a non-matching terminal absorbs a checked failure...
    /// let absorbed = handle(|| Err::<u32, _>(JobError(JobKind::Parse)))
    ///     .resolve_invoking(|_| {}, &[JobKind::Io]);
    /// assert_eq!(absorbed, Ok(None));
    ///
    /// // ...with it, the original error comes back out.
    /// let escaped = handle(|| Err::<u32, _>(JobError(JobKind::Parse)))
    ///     .allow_unsafe_escape()
    ///     .resolve_invoking(|_| {}, &[JobKind::Io]);
    /// assert_eq!(escaped.unwrap_err().kind(), JobKind::Parse);
    /// ```
    pub fn allow_unsafe_escape(mut self) -> Self {
        self.escape_unsafe = true;
        self
    }

    /// Terminal: raises `map(error)` on an exact match, otherwise yields the
    /// value slot after the escape check.
    ///
    /// An empty `kinds` list matches any failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked, Parse: checked, Rejected: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// let outcome = handle(|| Err::<u32, _>(JobError(JobKind::Io)))
    ///     .resolve_rethrowing(|_| JobError(JobKind::Rejected), &[JobKind::Io]);
    /// assert_eq!(outcome.unwrap_err().kind(), JobKind::Rejected);
    ///
    /// // Empty candidate list: any failure is rethrown.
    /// let any = handle(|| Err::<u32, _>(JobError(JobKind::Parse)))
    ///     .resolve_rethrowing(|err| err, &[]);
    /// assert_eq!(any.unwrap_err().kind(), JobKind::Parse);
    /// ```
    pub fn resolve_rethrowing<M>(mut self, map: M, kinds: &[E::Kind]) -> Result<Option<T>, E>
    where
        M: FnOnce(E) -> E,
    {
        let matched = if kinds.is_empty() {
            self.outcome.is_err()
        } else {
            self.claim_and_match(kinds)
        };
        match self.outcome {
            Err(error) if matched => Err(map(error)),
            outcome => Self {
                outcome,
                claimed: self.claimed,
                escape_unsafe: self.escape_unsafe,
            }
            .escape_or_value(),
        }
    }

    /// Terminal: raises `map(error)` on a parent match, otherwise yields the
    /// value slot after the escape check.
    pub fn resolve_rethrowing_parent<M>(mut self, map: M, parent: E::Kind) -> Result<Option<T>, E>
    where
        M: FnOnce(E) -> E,
    {
        let matched = self.parent_claim(&parent);
        match self.outcome {
            Err(error) if matched => Err(map(error)),
            outcome => Self {
                outcome,
                claimed: self.claimed,
                escape_unsafe: self.escape_unsafe,
            }
            .escape_or_value(),
        }
    }

    /// Terminal: raises `map(error)` only if the failure's kind was never
    /// claimed by an earlier step.
    ///
    /// This is the catch-all for leftovers; it performs no escape check and
    /// fires for checked kinds too.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind {
    ///         Runtime: unchecked,
    ///         BadInput: unchecked < Runtime,
    ///     }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// let mut logged = 0;
    /// let value = handle(|| Err::<u32, _>(JobError(JobKind::BadInput)))
    ///     .invoke_for_parent(|_| logged += 1, JobKind::Runtime)
    ///     .resolve_rethrowing_unclaimed(|err| err);
    ///
    /// // The parent step claimed BadInput, so nothing was left to rethrow.
    /// assert_eq!(logged, 1);
    /// assert_eq!(value, Ok(None));
    /// ```
    pub fn resolve_rethrowing_unclaimed<M>(self, map: M) -> Result<Option<T>, E>
    where
        M: FnOnce(E) -> E,
    {
        let unclaimed = match &self.outcome {
            Err(error) => !self.claimed.contains(&error.kind()),
            Ok(_) => false,
        };
        match self.outcome {
            Err(error) if unclaimed => Err(map(error)),
            outcome => Ok(outcome.ok()),
        }
    }

    /// Terminal: calls `handler` on an exact match and yields the value slot,
    /// otherwise yields it after the escape check.
    ///
    /// An empty `kinds` list matches any failure. When a failure is disposed
    /// of here the value slot is `None`; no success value ever existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked, Parse: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// let mut seen = None;
    /// let outcome = handle(|| Err::<u32, _>(JobError(JobKind::Parse)))
    ///     .resolve_invoking(|err| seen = Some(err.kind()), &[JobKind::Parse]);
    /// assert_eq!(outcome, Ok(None));
    /// assert_eq!(seen, Some(JobKind::Parse));
    /// ```
    pub fn resolve_invoking<H>(mut self, handler: H, kinds: &[E::Kind]) -> Result<Option<T>, E>
    where
        H: FnOnce(&E),
    {
        let matched = if kinds.is_empty() {
            self.outcome.is_err()
        } else {
            self.claim_and_match(kinds)
        };
        if matched {
            if let Err(error) = &self.outcome {
                handler(error);
            }
            return Ok(None);
        }
        self.escape_or_value()
    }

    /// Terminal: calls `handler` on a parent match and yields the value slot,
    /// otherwise yields it after the escape check.
    pub fn resolve_invoking_parent<H>(mut self, handler: H, parent: E::Kind) -> Result<Option<T>, E>
    where
        H: FnOnce(&E),
    {
        if self.parent_claim(&parent) {
            if let Err(error) = &self.outcome {
                handler(error);
            }
            return Ok(None);
        }
        self.escape_or_value()
    }

    /// Terminal: calls `handler` only if the failure's kind was never claimed
    /// by an earlier step, then yields the value slot.
    ///
    /// The catch-all counterpart of
    /// [`resolve_rethrowing_unclaimed`](Self::resolve_rethrowing_unclaimed);
    /// it cannot raise, which the return type records.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::prelude::*;
    ///
    /// error_kinds! {
    ///     enum JobKind { Io: checked }
    /// }
    /// # #[derive(Debug, PartialEq)]
    /// # struct JobError(JobKind);
    /// # impl KindedError for JobError {
    /// #     type Kind = JobKind;
    /// #     fn kind(&self) -> JobKind { self.0 }
    /// # }
    ///
    /// let mut calls = 0;
    /// let value = handle(|| Err::<u32, _>(JobError(JobKind::Io)))
    ///     .resolve_invoking_unclaimed(|_| calls += 1);
    /// assert_eq!(value, None);
    /// assert_eq!(calls, 1);
    /// ```
    pub fn resolve_invoking_unclaimed<H>(self, handler: H) -> Option<T>
    where
        H: FnOnce(&E),
    {
        match self.outcome {
            Ok(value) => Some(value),
            Err(error) => {
                if !self.claimed.contains(&error.kind()) {
                    handler(&error);
                }
                None
            }
        }
    }

    /// Registers every candidate kind, warning about kinds some earlier step
    /// already claimed, then reports whether the captured failure's kind is
    /// among the candidates.
    fn claim_and_match(&mut self, kinds: &[E::Kind]) -> bool {
        for kind in kinds {
            if self.claimed.contains(kind) {
                warn!(kind = ?kind, "error kind handled more than once in this chain");
            }
        }
        for kind in kinds {
            self.claimed.insert(*kind);
        }
        match &self.outcome {
            Err(error) => kinds.contains(&error.kind()),
            Ok(_) => false,
        }
    }

    /// Parent match: the failure's kind must be a strict descendant of
    /// `parent` and still unclaimed. Claims the failure's own kind on match.
    fn parent_claim(&mut self, parent: &E::Kind) -> bool {
        let kind = match &self.outcome {
            Err(error) => error.kind(),
            Ok(_) => return false,
        };
        if kind.is_strict_descendant_of(parent) && !self.claimed.contains(&kind) {
            self.claimed.insert(kind);
            true
        } else {
            false
        }
    }

    /// Escape check, run by terminals that did not match: an unclaimed
    /// failure escapes unconverted when its kind is unchecked or the unsafe
    /// flag is set; everything else resolves to the value slot.
    fn escape_or_value(self) -> Result<Option<T>, E> {
        match self.outcome {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                let kind = error.kind();
                let escapes = self.escape_unsafe || kind.category().is_unchecked();
                if escapes && !self.claimed.contains(&kind) {
                    Err(error)
                } else {
                    Ok(None)
                }
            }
        }
    }
}

impl<T, E: KindedError> From<Result<T, E>> for HandlerChain<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}
