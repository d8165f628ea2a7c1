//! The success/failure container.
//!
//! An [`Outcome<T, E>`] pairs an [`Optional<T>`] payload with an optional
//! cause. It is ok only when no cause is recorded and the payload is present.
//! Ok-ness is recomputed from those two fields on every query; nothing is
//! cached.
//!
//! An outcome with neither a cause nor a value is degenerate: the producer
//! claimed success but delivered nothing. It is treated as not ok and reports
//! [`Failure::MissingValue`] as its cause.

use tracing::{debug, error};

use crate::error::{AccessError, Failure};
use crate::optional::Optional;

/// The outcome of an operation that may fail.
///
/// # Example
///
/// ```
/// use safe_containers::{Failure, Outcome};
///
/// let parsed: Outcome<i32, String> = Outcome::from_value(0, None);
/// assert!(parsed.is_ok());
/// assert_eq!(parsed.unpack(), Ok(&0));
///
/// let failed = Outcome::from_value(0, Some("bad digit".to_owned()));
/// assert!(failed.is_err());
/// assert_eq!(failed.cause(), Some(Failure::Cause(&"bad digit".to_owned())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T, E> {
    value: Optional<T>,
    cause: Option<E>,
}

impl<T, E> Outcome<T, E> {
    /// Wraps the `(value, cause)` pair returned by a fallible operation.
    ///
    /// The payload always holds `value`, even when `cause` is set; ok-ness is
    /// computed from both fields at query time.
    #[must_use]
    pub const fn from_value(value: T, cause: Option<E>) -> Self {
        Self {
            value: Optional::holding(value),
            cause,
        }
    }

    /// Wraps a pair whose value side may be missing.
    ///
    /// Passing `None` for both sides builds the degenerate outcome.
    #[must_use]
    pub fn from_nullable(value: Option<T>, cause: Option<E>) -> Self {
        Self::from_parts(Optional::from(value), cause)
    }

    /// Builds an outcome from an existing payload container and cause.
    #[must_use]
    pub const fn from_parts(value: Optional<T>, cause: Option<E>) -> Self {
        Self { value, cause }
    }

    /// Returns `true` when no cause is recorded and a value is present.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.cause.is_none() && self.value.is_present()
    }

    /// Returns `true` whenever [`is_ok`](Self::is_ok) is `false`.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns the payload container regardless of ok-ness.
    #[must_use]
    pub const fn payload(&self) -> &Optional<T> {
        &self.value
    }

    /// Resolves why this outcome is not ok.
    ///
    /// Returns the stored cause when there is one. Without a stored cause, an
    /// empty payload yields [`Failure::MissingValue`]; a present payload
    /// yields `None`. A `Some` result therefore does not imply a cause was
    /// ever supplied.
    #[must_use]
    pub fn cause(&self) -> Option<Failure<&E>> {
        self.unpack().err()
    }

    /// Returns an independent copy of the value.
    ///
    /// Reserved for call sites that have already checked
    /// [`is_ok`](Self::is_ok).
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::NotOk`] when the outcome is not ok.
    #[must_use]
    #[track_caller]
    pub fn unwrap_or_fail(&self) -> T
    where
        T: Clone,
    {
        match self.unpack() {
            Ok(value) => value.clone(),
            Err(failure) => {
                error!(
                    synthesized = failure.is_synthesized(),
                    "unchecked unwrap of an Outcome that is not ok"
                );
                panic!("{}", AccessError::NotOk);
            }
        }
    }

    /// Returns a copy of the value when ok, otherwise `default`.
    #[must_use]
    pub fn unwrap_or_default(&self, default: T) -> T
    where
        T: Clone,
    {
        self.unpack().map_or(default, T::clone)
    }

    /// Borrows the value when ok, otherwise returns the resolved cause.
    ///
    /// # Errors
    ///
    /// Returns the same failure [`cause`](Self::cause) reports when the
    /// outcome is not ok.
    pub fn unpack(&self) -> Result<&T, Failure<&E>> {
        if let Some(cause) = &self.cause {
            return Err(Failure::Cause(cause));
        }
        self.value.peek().ok_or_else(|| {
            debug!("outcome recorded no cause but holds no value");
            Failure::MissingValue
        })
    }

    /// Consumes the outcome into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the owned cause, or [`Failure::MissingValue`] for the
    /// degenerate outcome.
    pub fn into_result(self) -> Result<T, Failure<E>> {
        if let Some(cause) = self.cause {
            return Err(Failure::Cause(cause));
        }
        self.value.into_inner().ok_or_else(|| {
            debug!("outcome recorded no cause but holds no value");
            Failure::MissingValue
        })
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::from_value(value, None),
            Err(cause) => Self::from_parts(Optional::empty(), Some(cause)),
        }
    }
}
