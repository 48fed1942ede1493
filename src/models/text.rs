//! Serde helper for text columns the parc API may serve as `null`.
use serde::{Deserialize, Deserializer};

/// Reads a string, treating `null` like an absent value.
pub fn deserialize_nullable<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
