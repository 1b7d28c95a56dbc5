//! A single path/URL pair as read from the redirect table.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the redirect table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Record {
    /// Request target to match, e.g. `/docs`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,

    /// Redirect destination written to the `Location` header.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Record {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

// `"path": null` behaves like an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
