//! Serde support for [`Optional`].
//!
//! The container is transparent on the wire: an empty `Optional<T>` encodes
//! as the format's null and a present one encodes exactly as its `T` would.
//! Decoding mirrors that, and any error from `T`'s own deserializer is
//! returned untouched.
//!
//! Because the encoding carries no envelope, the round trip is lossless only
//! when `T` itself never encodes as null. A held empty value such as
//! `Optional::holding(Optional::<i32>::empty())` encodes as `null` and so
//! decodes as an empty outer container, exactly as `Some(None)` does for
//! `Option<Option<T>>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
