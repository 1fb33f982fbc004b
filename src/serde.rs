use crate::{Backing, EnumIndex, EnumSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialized as the raw bitmask returned by [`EnumSet::serialize`].
impl<T: EnumIndex, U: Backing + Serialize> Serialize for EnumSet<T, U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EnumSet::serialize(self).serialize(serializer)
    }
}

/// Deserialized from a raw bitmask, kept verbatim like
/// [`EnumSet::deserialize`].
impl<'de, T: EnumIndex, U: Backing + Deserialize<'de>> Deserialize<'de> for EnumSet<T, U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        U::deserialize(deserializer).map(Self::from_bits)
    }
}
