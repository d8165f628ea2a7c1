//! Error types for the safe-containers crate.
//!
//! [`Failure`] is what a not-ok [`Outcome`](crate::Outcome) reports, either a
//! caller-supplied cause or one synthesised for the degenerate "no cause, no
//! value" state. [`AccessError`] describes the precondition violations raised
//! by the panicking accessors.

use thiserror::Error;

/// The reason an [`Outcome`](crate::Outcome) is not ok.
///
/// Accessors on a borrowed outcome return `Failure<&E>`; use
/// [`Failure::cloned`] or [`Outcome::into_result`](crate::Outcome::into_result)
/// when an owned cause is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Failure<E> {
    /// A cause supplied by the caller, carried verbatim.
    #[error("{0}")]
    Cause(E),

    /// No cause was recorded, but the outcome holds no value either.
    #[error("outcome has neither a cause nor a value")]
    MissingValue,
}

impl<E> Failure<E> {
    /// Returns the caller-supplied cause, or `None` when it was synthesised.
    #[must_use]
    pub const fn cause(&self) -> Option<&E> {
        match self {
            Self::Cause(cause) => Some(cause),
            Self::MissingValue => None,
        }
    }

    /// Returns `true` when this failure was manufactured for an outcome that
    /// claimed success without a value.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        matches!(self, Self::MissingValue)
    }

    /// Maps the caller-supplied cause, leaving a synthesised one untouched.
    #[must_use]
    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> Failure<F> {
        match self {
            Self::Cause(cause) => Failure::Cause(f(cause)),
            Self::MissingValue => Failure::MissingValue,
        }
    }
}

impl<E: Clone> Failure<&E> {
    /// Clones the borrowed cause into an owned failure.
    #[must_use]
    pub fn cloned(self) -> Failure<E> {
        self.map(Clone::clone)
    }
}

/// A precondition violation: an unchecked accessor was used on a container
/// that could not satisfy it.
///
/// These are programmer errors. The accessors that detect them panic with
/// this type's message instead of returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The value of an empty [`Optional`](crate::Optional) was requested.
    #[error("accessed the value of an empty Optional")]
    UndefinedAccess,

    /// The value of an [`Outcome`](crate::Outcome) that is not ok was
    /// requested.
    #[error("unwrapped an Outcome that is not ok")]
    NotOk,
}
