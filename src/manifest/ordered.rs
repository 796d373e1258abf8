//! Order-preserving serde adapters for manifest mappings.
//!
//! YAML mappings carry declaration order, and for `splits` that order is
//! semantic (allocation order, remainder policy). Deserializing through a
//! `HashMap` would discard it, so these adapters keep the entries as
//! ordered pairs.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::Deserialize;

fn deserialize_pairs<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct PairsVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a mapping")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                pairs.push(entry);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor(PhantomData))
}

pub mod split_table {
    use super::*;
    use crate::manifest::SplitShare;

    pub fn serialize<S: Serializer>(shares: &[SplitShare], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(shares.iter().map(|s| (&s.name, s.percent)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<SplitShare>, D::Error> {
        let pairs: Vec<(String, u8)> = deserialize_pairs(deserializer)?;
        Ok(pairs
            .into_iter()
            .map(|(name, percent)| SplitShare { name, percent })
            .collect())
    }
}

pub mod tracking_table {
    use super::*;
    use crate::manifest::TrackingSpec;

    pub fn serialize<S: Serializer>(
        specs: &[TrackingSpec],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(specs.iter().map(|t| (&t.name, &t.pattern)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<TrackingSpec>, D::Error> {
        let pairs: Vec<(String, String)> = deserialize_pairs(deserializer)?;
        Ok(pairs
            .into_iter()
            .map(|(name, pattern)| TrackingSpec { name, pattern })
            .collect())
    }
}
