use serde::{Deserialize, Deserializer};

// Taken from https://github.com/serde-rs/json/issues/447#issuecomment-389673971.
/// Returns `None` if deserialization fails.
pub fn ok_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(v).ok())
}
