//! Explicit presence and outcome containers.
//!
//! This crate replaces ad-hoc "is it set?" checks with two small value types
//! whose state is always explicit:
//!
//! - [`Optional<T>`] holds one value or nothing. Presence depends only on
//!   which constructor built it, never on what the value looks like.
//! - [`Outcome<T, E>`] pairs an [`Optional<T>`] payload with an optional
//!   cause. It is ok only when there is a value and no cause; a missing value
//!   without a cause is reported as [`Failure::MissingValue`].
//!
//! Both offer borrowing accessors (aliases into the container) and cloning
//! accessors (independent copies) as separately named operations. The
//! `*_or_fail` accessors panic on misuse; everything else reports absence
//! through `Option` or `Result`.
//!
//! With the default `serde` feature, `Optional<T>` serialises exactly like
//! `Option<T>`.
//!
//! # Example
//!
//! ```
//! use safe_containers::{Optional, Outcome};
//!
//! fn lookup(id: u32) -> (Option<String>, Option<String>) {
//!     if id == 0 {
//!         (None, Some("id 0 is reserved".to_owned()))
//!     } else {
//!         (Some(format!("user-{id}")), None)
//!     }
//! }
//!
//! let (value, cause) = lookup(7);
//! let found = Outcome::from_nullable(value, cause);
//! assert_eq!(found.unwrap_or_default("anonymous".to_owned()), "user-7");
//!
//! let nickname = Optional::<String>::empty();
//! let fallback = "n/a".to_owned();
//! assert_eq!(nickname.value_or_default(&fallback), "n/a");
//! ```

mod error;
mod optional;
mod outcome;
#[cfg(feature = "serde")]
mod wire;

pub use error::{AccessError, Failure};
pub use optional::Optional;
pub use outcome::Outcome;
