// ABOUTME: Log driver selection and its options.
// ABOUTME: Serialized as {"Type": driver, "Config": {option: value}}.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    log_type: Option<String>,

    #[serde(rename = "Config", default, skip_serializing_if = "Option::is_none")]
    log_options: Option<BTreeMap<String, String>>,
}

impl LogConfig {
    pub fn new(log_type: impl Into<String>) -> Self {
        Self {
            log_type: Some(log_type.into()),
            log_options: None,
        }
    }

    /// Add a driver option, e.g. `max-size` for the json-file driver.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.log_options
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn log_type(&self) -> Option<&str> {
        self.log_type.as_deref()
    }

    pub fn log_options(&self) -> Option<&BTreeMap<String, String>> {
        self.log_options.as_ref()
    }
}

impl fmt::Display for LogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log_type.as_deref().unwrap_or(""))?;
        if let Some(options) = &self.log_options {
            let joined: Vec<String> = options.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, "{{{}}}", joined.join(", "))?;
        }
        Ok(())
    }
}
