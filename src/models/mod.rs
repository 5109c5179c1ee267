pub mod domain;
pub mod dto;

use serde::{Deserialize, Deserializer};

/// Reads a JSON `null` as the type's default. The backend serializes unset
/// string columns as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
