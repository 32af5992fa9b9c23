// ABOUTME: Host-side binding for an exposed container port.
// ABOUTME: Serialized as {"HostIp": ..., "HostPort": ...} in the PortBindings map.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PortBinding {
    #[serde(rename = "HostIp", default, skip_serializing_if = "Option::is_none")]
    host_ip: Option<String>,

    #[serde(rename = "HostPort", default, skip_serializing_if = "Option::is_none")]
    host_port: Option<String>,
}

impl PortBinding {
    /// Bind to a specific host address and port.
    pub fn of(host_ip: impl Into<String>, host_port: impl Into<String>) -> Self {
        Self {
            host_ip: Some(host_ip.into()),
            host_port: Some(host_port.into()),
        }
    }

    /// Bind to a host address and let the engine pick the port.
    pub fn random_port(host_ip: impl Into<String>) -> Self {
        Self {
            host_ip: Some(host_ip.into()),
            host_port: None,
        }
    }

    pub fn host_ip(&self) -> Option<&str> {
        self.host_ip.as_deref()
    }

    pub fn host_port(&self) -> Option<&str> {
        self.host_port.as_deref()
    }
}

impl fmt::Display for PortBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.host_ip.as_deref().unwrap_or(""),
            self.host_port.as_deref().unwrap_or("")
        )
    }
}
