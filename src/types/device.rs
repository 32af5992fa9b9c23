// ABOUTME: Host device mapped into a container.
// ABOUTME: Serialized with PathOnHost, PathInContainer, and CgroupPermissions keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename = "PathOnHost", default, skip_serializing_if = "Option::is_none")]
    path_on_host: Option<String>,

    #[serde(
        rename = "PathInContainer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    path_in_container: Option<String>,

    #[serde(
        rename = "CgroupPermissions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    cgroup_permissions: Option<String>,
}

impl Device {
    /// `cgroup_permissions` is a subset of "rwm", e.g. "rwm" or "r".
    pub fn new(
        path_on_host: impl Into<String>,
        path_in_container: impl Into<String>,
        cgroup_permissions: impl Into<String>,
    ) -> Self {
        Self {
            path_on_host: Some(path_on_host.into()),
            path_in_container: Some(path_in_container.into()),
            cgroup_permissions: Some(cgroup_permissions.into()),
        }
    }

    pub fn path_on_host(&self) -> Option<&str> {
        self.path_on_host.as_deref()
    }

    pub fn path_in_container(&self) -> Option<&str> {
        self.path_in_container.as_deref()
    }

    pub fn cgroup_permissions(&self) -> Option<&str> {
        self.cgroup_permissions.as_deref()
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.path_on_host.as_deref().unwrap_or(""),
            self.path_in_container.as_deref().unwrap_or(""),
            self.cgroup_permissions.as_deref().unwrap_or("")
        )
    }
}
