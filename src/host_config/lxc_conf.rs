// ABOUTME: A single raw LXC configuration key/value pair.
// ABOUTME: Serialized as {"Key": ..., "Value": ...} in the LxcConf list.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LxcConfParameter {
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,

    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl LxcConfParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for LxcConfParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.key.as_deref().unwrap_or(""),
            self.value.as_deref().unwrap_or("")
        )
    }
}
