//! Serialization, available with the `serde` feature.
//!
//! An instant is written as its raw 64-bit value, so it round-trips
//! exactly, invalid instants included.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::instant::Instant;


impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.raw())
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Instant::from_raw)
    }
}
