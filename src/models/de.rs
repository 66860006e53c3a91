use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as the field's default value.
///
/// `#[serde(default)]` only covers absent keys; the registry also sends
/// `null` for empty strings, lists and counts.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
