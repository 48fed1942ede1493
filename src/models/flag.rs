//! Serde helpers for the 0/1 flags the parc API stores as integers.
//! Reads accept either a JSON boolean or a number; any non-zero number is `true`.
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

impl From<RawFlag> for bool {
    fn from(raw: RawFlag) -> Self {
        match raw {
            RawFlag::Bool(value) => value,
            RawFlag::Int(value) => value != 0,
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    RawFlag::deserialize(deserializer).map(bool::from)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawFlag>::deserialize(deserializer).map(|raw| raw.map(bool::from))
}

/// Writes the flag as `0`/`1`, the shape the attraction table uses.
pub mod as_int {
    use super::*;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        super::deserialize(deserializer)
    }
}
