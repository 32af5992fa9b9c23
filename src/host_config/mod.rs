// ABOUTME: Immutable host configuration sent with container create/update requests.
// ABOUTME: Built through HostConfigBuilder; unset fields are omitted from the wire form.

mod bind;
mod builder;
mod deserialize;
mod lxc_conf;
mod restart_policy;

pub use bind::{Bind, BindBuilder, BindFrom, BindTo};
pub use builder::HostConfigBuilder;
pub use lxc_conf::LxcConfParameter;
pub use restart_policy::{RawRestartPolicy, RestartPolicy};

use crate::types::{Device, LogConfig, PortBinding};
use deserialize::deserialize_list;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Port bindings keyed by container port spec, e.g. `"80/tcp"`.
pub type PortBindings = BTreeMap<String, Vec<PortBinding>>;

/// Host-level runtime configuration of a container.
///
/// Every field is optional and `None` means "not set": the engine applies its
/// own default and the field is left out of the serialized JSON. A field set
/// to an empty or falsy value is still sent. No values are validated here;
/// the engine is the judge of e.g. `memory_swap < memory`.
///
/// Instances are immutable. Use [`HostConfig::to_builder`] to derive a
/// modified copy. List fields never hold duplicates, whether they came from
/// the builder or were decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(
        rename = "Binds",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    binds: Option<Vec<String>>,

    #[serde(
        rename = "ContainerIDFile",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    container_id_file: Option<String>,

    #[serde(
        rename = "LxcConf",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    lxc_conf: Option<Vec<LxcConfParameter>>,

    #[serde(rename = "Privileged", default, skip_serializing_if = "Option::is_none")]
    privileged: Option<bool>,

    #[serde(rename = "PortBindings", default, skip_serializing_if = "Option::is_none")]
    port_bindings: Option<PortBindings>,

    #[serde(
        rename = "Links",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    links: Option<Vec<String>>,

    #[serde(
        rename = "PublishAllPorts",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    publish_all_ports: Option<bool>,

    #[serde(
        rename = "Dns",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    dns: Option<Vec<String>>,

    #[serde(
        rename = "DnsSearch",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    dns_search: Option<Vec<String>>,

    #[serde(
        rename = "ExtraHosts",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    extra_hosts: Option<Vec<String>>,

    #[serde(
        rename = "VolumesFrom",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    volumes_from: Option<Vec<String>>,

    #[serde(
        rename = "CapAdd",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    cap_add: Option<Vec<String>>,

    #[serde(
        rename = "CapDrop",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    cap_drop: Option<Vec<String>>,

    #[serde(rename = "NetworkMode", default, skip_serializing_if = "Option::is_none")]
    network_mode: Option<String>,

    #[serde(
        rename = "SecurityOpt",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    security_opt: Option<Vec<String>>,

    #[serde(
        rename = "Devices",
        default,
        deserialize_with = "deserialize_list",
        skip_serializing_if = "Option::is_none"
    )]
    devices: Option<Vec<Device>>,

    #[serde(rename = "Memory", default, skip_serializing_if = "Option::is_none")]
    memory: Option<i64>,

    #[serde(rename = "MemorySwap", default, skip_serializing_if = "Option::is_none")]
    memory_swap: Option<i64>,

    #[serde(rename = "CpuShares", default, skip_serializing_if = "Option::is_none")]
    cpu_shares: Option<i64>,

    #[serde(rename = "CpusetCpus", default, skip_serializing_if = "Option::is_none")]
    cpuset_cpus: Option<String>,

    #[serde(rename = "CpuQuota", default, skip_serializing_if = "Option::is_none")]
    cpu_quota: Option<i64>,

    #[serde(rename = "CgroupParent", default, skip_serializing_if = "Option::is_none")]
    cgroup_parent: Option<String>,

    #[serde(rename = "RestartPolicy", default, skip_serializing_if = "Option::is_none")]
    restart_policy: Option<RestartPolicy>,

    #[serde(rename = "LogConfig", default, skip_serializing_if = "Option::is_none")]
    log_config: Option<LogConfig>,

    #[serde(rename = "IpcMode", default, skip_serializing_if = "Option::is_none")]
    ipc_mode: Option<String>,
}

impl HostConfig {
    pub fn builder() -> HostConfigBuilder {
        HostConfigBuilder::new()
    }

    /// Start a builder pre-filled with every field of this config.
    pub fn to_builder(&self) -> HostConfigBuilder {
        HostConfigBuilder::from_config(self.clone())
    }

    /// Bind mounts in `src:dest[:ro]` form.
    pub fn binds(&self) -> Option<&[String]> {
        self.binds.as_deref()
    }

    /// Host path the engine writes the container ID to.
    pub fn container_id_file(&self) -> Option<&str> {
        self.container_id_file.as_deref()
    }

    pub fn lxc_conf(&self) -> Option<&[LxcConfParameter]> {
        self.lxc_conf.as_deref()
    }

    pub fn privileged(&self) -> Option<bool> {
        self.privileged
    }

    /// Read-only view of the port bindings map.
    pub fn port_bindings(&self) -> Option<&PortBindings> {
        self.port_bindings.as_ref()
    }

    /// Container links in `name:alias` form.
    pub fn links(&self) -> Option<&[String]> {
        self.links.as_deref()
    }

    pub fn publish_all_ports(&self) -> Option<bool> {
        self.publish_all_ports
    }

    pub fn dns(&self) -> Option<&[String]> {
        self.dns.as_deref()
    }

    pub fn dns_search(&self) -> Option<&[String]> {
        self.dns_search.as_deref()
    }

    /// Extra `/etc/hosts` entries in `hostname:ip` form.
    pub fn extra_hosts(&self) -> Option<&[String]> {
        self.extra_hosts.as_deref()
    }

    pub fn volumes_from(&self) -> Option<&[String]> {
        self.volumes_from.as_deref()
    }

    pub fn cap_add(&self) -> Option<&[String]> {
        self.cap_add.as_deref()
    }

    pub fn cap_drop(&self) -> Option<&[String]> {
        self.cap_drop.as_deref()
    }

    /// `bridge`, `host`, `none`, `container:<id>` or a network name.
    pub fn network_mode(&self) -> Option<&str> {
        self.network_mode.as_deref()
    }

    pub fn security_opt(&self) -> Option<&[String]> {
        self.security_opt.as_deref()
    }

    pub fn devices(&self) -> Option<&[Device]> {
        self.devices.as_deref()
    }

    /// Memory limit in bytes.
    pub fn memory(&self) -> Option<i64> {
        self.memory
    }

    /// Memory plus swap limit in bytes; `-1` disables the swap limit.
    pub fn memory_swap(&self) -> Option<i64> {
        self.memory_swap
    }

    pub fn cpu_shares(&self) -> Option<i64> {
        self.cpu_shares
    }

    /// CPUs the container may run on, e.g. `0-3` or `0,1`.
    pub fn cpuset_cpus(&self) -> Option<&str> {
        self.cpuset_cpus.as_deref()
    }

    /// Microseconds of CPU time per scheduling period.
    pub fn cpu_quota(&self) -> Option<i64> {
        self.cpu_quota
    }

    pub fn cgroup_parent(&self) -> Option<&str> {
        self.cgroup_parent.as_deref()
    }

    pub fn restart_policy(&self) -> Option<&RestartPolicy> {
        self.restart_policy.as_ref()
    }

    pub fn log_config(&self) -> Option<&LogConfig> {
        self.log_config.as_ref()
    }

    pub fn ipc_mode(&self) -> Option<&str> {
        self.ipc_mode.as_deref()
    }
}

// =============================================================================
// Display
// =============================================================================

struct List<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for List<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

struct PortMap<'a>(&'a PortBindings);

impl fmt::Display for PortMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (port, bindings)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", port, List(bindings))?;
        }
        write!(f, "}}")
    }
}

struct Fields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl Fields<'_, '_> {
    fn add<T: fmt::Display>(&mut self, name: &str, value: Option<T>) -> fmt::Result {
        if !self.first {
            write!(self.f, ", ")?;
        }
        self.first = false;
        match value {
            Some(v) => write!(self.f, "{}={}", name, v),
            None => write!(self.f, "{}=null", name),
        }
    }
}

impl fmt::Display for HostConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostConfig{{")?;
        let mut out = Fields { f, first: true };
        out.add("binds", self.binds().map(List))?;
        out.add("containerIDFile", self.container_id_file())?;
        out.add("lxcConf", self.lxc_conf().map(List))?;
        out.add("privileged", self.privileged)?;
        out.add("portBindings", self.port_bindings().map(PortMap))?;
        out.add("links", self.links().map(List))?;
        out.add("publishAllPorts", self.publish_all_ports)?;
        out.add("dns", self.dns().map(List))?;
        out.add("dnsSearch", self.dns_search().map(List))?;
        out.add("extraHosts", self.extra_hosts().map(List))?;
        out.add("volumesFrom", self.volumes_from().map(List))?;
        out.add("capAdd", self.cap_add().map(List))?;
        out.add("capDrop", self.cap_drop().map(List))?;
        out.add("networkMode", self.network_mode())?;
        out.add("securityOpt", self.security_opt().map(List))?;
        out.add("devices", self.devices().map(List))?;
        out.add("memory", self.memory)?;
        out.add("memorySwap", self.memory_swap)?;
        out.add("cpuShares", self.cpu_shares)?;
        out.add("cpusetCpus", self.cpuset_cpus())?;
        out.add("cpuQuota", self.cpu_quota)?;
        out.add("cgroupParent", self.cgroup_parent())?;
        out.add("restartPolicy", self.restart_policy())?;
        out.add("logConfig", self.log_config())?;
        out.add("ipcMode", self.ipc_mode())?;
        write!(out.f, "}}")
    }
}
