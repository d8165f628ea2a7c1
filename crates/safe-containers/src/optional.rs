//! The optional-value container.
//!
//! [`Optional<T>`] holds either exactly one `T` or nothing. Which state it is
//! in is decided only by how it was built: [`Optional::holding`] always
//! yields a present container, even for zero values such as `0`, `""` or a
//! `Default` struct, and [`Optional::empty`] always yields an absent one.
//! The payload is never inspected to guess whether it "looks empty".
//!
//! Accessors come in two families:
//!
//! - **Aliases** ([`peek`](Optional::peek), [`peek_mut`](Optional::peek_mut),
//!   [`unwrap_alias_or_fail`](Optional::unwrap_alias_or_fail),
//!   [`value_or_default`](Optional::value_or_default)) borrow the container's
//!   own storage. Mutating through `peek_mut` mutates the container.
//! - **Copies** ([`copy_or_default`](Optional::copy_or_default),
//!   [`copy_if_present`](Optional::copy_if_present)) clone the value out, so
//!   the result is independent of both the container and any default.

use tracing::error;

use crate::error::AccessError;

/// A container that either holds one value or holds nothing.
///
/// # Example
///
/// ```
/// use safe_containers::Optional;
///
/// let zero = Optional::holding(0);
/// assert!(zero.is_present());
/// assert_eq!(zero.peek(), Some(&0));
///
/// let nothing = Optional::<i32>::empty();
/// assert_eq!(nothing.copy_or_default(10), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    /// Builds a container holding `value`.
    ///
    /// The result is present regardless of what `value` is.
    #[must_use]
    pub const fn holding(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Builds an empty container.
    #[must_use]
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    /// Bridges a borrowed nullable source into a container.
    ///
    /// `None` yields an empty container; `Some(value)` yields one holding a
    /// clone of `value`.
    ///
    /// ```
    /// use safe_containers::Optional;
    ///
    /// let source = Some(&3);
    /// assert_eq!(Optional::holding_from_reference(source).peek(), Some(&3));
    /// assert!(Optional::<i32>::holding_from_reference(None).is_absent());
    /// ```
    #[must_use]
    pub fn holding_from_reference(reference: Option<&T>) -> Self
    where
        T: Clone,
    {
        Self {
            slot: reference.cloned(),
        }
    }

    /// Returns `true` when the container holds a value.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns `true` when the container is empty. Always the negation of
    /// [`is_present`](Self::is_present).
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrows the held value, or returns `None` when empty.
    #[must_use]
    pub const fn peek(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Mutably borrows the held value, or returns `None` when empty.
    ///
    /// Writes through the returned reference change the container itself.
    #[must_use]
    pub const fn peek_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Borrows the held value without a presence check.
    ///
    /// Meant for call sites that have already established presence. Use
    /// [`peek`](Self::peek) or [`value_or_fail`](Self::value_or_fail) when
    /// absence is a normal outcome.
    ///
    /// # Panics
    ///
    /// Panics with [`AccessError::UndefinedAccess`] when the container is
    /// empty.
    #[must_use]
    #[track_caller]
    pub fn unwrap_alias_or_fail(&self) -> &T {
        let Some(value) = self.slot.as_ref() else {
            error!("unchecked access to an empty Optional");
            panic!("{}", AccessError::UndefinedAccess);
        };
        value
    }

    /// Borrows the held value, falling back to `default` when empty.
    ///
    /// Nothing is copied; the returned reference points either into the
    /// container or at `default`.
    #[must_use]
    pub fn value_or_default<'a>(&'a self, default: &'a T) -> &'a T {
        self.slot.as_ref().unwrap_or(default)
    }

    /// Borrows the held value, computing a fallback lazily when empty.
    ///
    /// `producer` runs exactly once when the container is empty and not at
    /// all when it holds a value.
    ///
    /// ```
    /// use safe_containers::Optional;
    ///
    /// let one = Optional::holding(1);
    /// let fallback = 10;
    /// let mut calls = 0;
    /// let value = one.value_or_default_computed(|| {
    ///     calls += 1;
    ///     &fallback
    /// });
    /// assert_eq!((*value, calls), (1, 0));
    /// ```
    pub fn value_or_default_computed<'a, F>(&'a self, producer: F) -> &'a T
    where
        F: FnOnce() -> &'a T,
    {
        self.slot.as_ref().unwrap_or_else(producer)
    }

    /// Borrows the held value, or returns `cause` when empty.
    ///
    /// # Errors
    ///
    /// Returns `cause` unchanged if the container is empty.
    pub fn value_or_fail<E>(&self, cause: E) -> Result<&T, E> {
        self.slot.as_ref().ok_or(cause)
    }

    /// Runs `action` with the held value; does nothing when empty.
    pub fn if_present(&self, action: impl FnOnce(&T)) {
        if let Some(value) = &self.slot {
            action(value);
        }
    }

    /// Runs `action` when empty; does nothing when a value is held.
    pub fn if_absent(&self, action: impl FnOnce()) {
        if self.slot.is_none() {
            action();
        }
    }

    /// Returns an independent copy of the held value, or `default` when
    /// empty.
    ///
    /// Mutating the result never affects the container.
    #[must_use]
    pub fn copy_or_default(&self, default: T) -> T
    where
        T: Clone,
    {
        self.slot.as_ref().map_or(default, T::clone)
    }

    /// Returns an independent copy of the held value, if any.
    #[must_use]
    pub fn copy_if_present(&self) -> Option<T>
    where
        T: Clone,
    {
        self.slot.clone()
    }

    /// Chains a computation that may itself produce nothing.
    ///
    /// When a value is held, `f` is called once with it and its result is
    /// returned as is. When empty, `f` is not called and an empty
    /// `Optional<P>` is returned.
    ///
    /// ```
    /// use safe_containers::Optional;
    ///
    /// let name = Optional::holding(String::from("foo"));
    /// let first = name.map(|n| Optional::from(n.chars().next()));
    /// assert_eq!(first, Optional::holding('f'));
    /// ```
    #[must_use]
    pub fn map<P>(&self, f: impl FnOnce(&T) -> Optional<P>) -> Optional<P> {
        self.slot.as_ref().map_or_else(Optional::empty, f)
    }

    /// Consumes the container, returning the slot as a plain `Option`.
    #[must_use]
    pub fn into_inner(self) -> Option<T> {
        self.slot
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.slot
    }
}
