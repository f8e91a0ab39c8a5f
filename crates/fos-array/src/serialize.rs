//! Serde Bridge
//!
//! Arrays serialize as plain sequences. Sharing is not preserved: every
//! deserialized array owns a fresh, unique buffer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CowArray;

impl<T: Serialize> Serialize for CowArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CowArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(CowArray::from_vec)
    }
}
