// ABOUTME: Mutable accumulator that produces an immutable HostConfig.
// ABOUTME: Normalizes list fields (first-seen order, no duplicates) at set time.

use super::{HostConfig, LxcConfParameter, PortBindings, RestartPolicy};
use crate::types::{Device, LogConfig, PortBinding};

/// Builder for [`HostConfig`].
///
/// Setters fall into three families:
///
/// - List setters (`binds`, `links`, `dns`, ...) replace the field with the
///   given items, dropping later duplicates. An empty input leaves the field
///   as it was; there is no way to clear a list once set.
/// - Scalar setters (`memory`, `network_mode`, ...) always assign, so passing
///   `None` clears a previous value.
/// - `port_bindings` replaces the map, but ignores an empty input like the
///   list setters do.
///
/// `binds` is the only field that can also be extended, see
/// [`HostConfigBuilder::append_binds`].
#[derive(Debug, Clone, Default)]
#[must_use = "a builder does nothing until built"]
pub struct HostConfigBuilder {
    config: HostConfig,
}

/// Keep the first occurrence of each element, preserving order.
pub(super) fn copy_without_duplicates<T: PartialEq>(
    input: impl IntoIterator<Item = T>,
) -> Vec<T> {
    let mut list = Vec::new();
    for element in input {
        if !list.contains(&element) {
            list.push(element);
        }
    }
    list
}

/// Replace `field` with the deduplicated input, unless the input is empty.
fn replace_list<T: PartialEq>(
    field: &mut Option<Vec<T>>,
    input: impl IntoIterator<Item = T>,
) {
    let list = copy_without_duplicates(input);
    if !list.is_empty() {
        *field = Some(list);
    }
}

impl HostConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_config(config: HostConfig) -> Self {
        Self { config }
    }

    /// Replace the bind list. Accepts strings or [`Bind`](super::Bind) values.
    ///
    /// Use [`append_binds`](Self::append_binds) to add to the existing list.
    pub fn binds<I, S>(mut self, binds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(&mut self.config.binds, binds.into_iter().map(Into::into));
        self
    }

    /// Append to the bind list, then drop duplicates across the whole list.
    ///
    /// Unlike [`binds`](Self::binds), this sets the field even when both the
    /// current list and the input are empty.
    pub fn append_binds<I, S>(mut self, binds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let existing = self.config.binds.take().unwrap_or_default();
        let combined = existing.into_iter().chain(binds.into_iter().map(Into::into));
        self.config.binds = Some(copy_without_duplicates(combined));
        self
    }

    pub fn container_id_file(mut self, path: impl Into<Option<String>>) -> Self {
        self.config.container_id_file = path.into();
        self
    }

    pub fn lxc_conf(mut self, params: impl IntoIterator<Item = LxcConfParameter>) -> Self {
        replace_list(&mut self.config.lxc_conf, params);
        self
    }

    pub fn privileged(mut self, privileged: impl Into<Option<bool>>) -> Self {
        self.config.privileged = privileged.into();
        self
    }

    /// Replace the port bindings with a copy of `bindings`, keyed by
    /// container port spec such as `"8080/tcp"`.
    pub fn port_bindings<I, K>(mut self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<PortBinding>)>,
        K: Into<String>,
    {
        let map: PortBindings = bindings
            .into_iter()
            .map(|(port, list)| (port.into(), list))
            .collect();
        if !map.is_empty() {
            self.config.port_bindings = Some(map);
        }
        self
    }

    pub fn links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(&mut self.config.links, links.into_iter().map(Into::into));
        self
    }

    pub fn publish_all_ports(mut self, publish: impl Into<Option<bool>>) -> Self {
        self.config.publish_all_ports = publish.into();
        self
    }

    pub fn dns<I, S>(mut self, servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(&mut self.config.dns, servers.into_iter().map(Into::into));
        self
    }

    pub fn dns_search<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(
            &mut self.config.dns_search,
            domains.into_iter().map(Into::into),
        );
        self
    }

    pub fn extra_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(
            &mut self.config.extra_hosts,
            hosts.into_iter().map(Into::into),
        );
        self
    }

    pub fn volumes_from<I, S>(mut self, containers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(
            &mut self.config.volumes_from,
            containers.into_iter().map(Into::into),
        );
        self
    }

    pub fn cap_add<I, S>(mut self, caps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(&mut self.config.cap_add, caps.into_iter().map(Into::into));
        self
    }

    pub fn cap_drop<I, S>(mut self, caps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(&mut self.config.cap_drop, caps.into_iter().map(Into::into));
        self
    }

    pub fn network_mode(mut self, mode: impl Into<Option<String>>) -> Self {
        self.config.network_mode = mode.into();
        self
    }

    pub fn security_opt<I, S>(mut self, opts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        replace_list(
            &mut self.config.security_opt,
            opts.into_iter().map(Into::into),
        );
        self
    }

    pub fn devices(mut self, devices: impl IntoIterator<Item = Device>) -> Self {
        replace_list(&mut self.config.devices, devices);
        self
    }

    pub fn memory(mut self, bytes: impl Into<Option<i64>>) -> Self {
        self.config.memory = bytes.into();
        self
    }

    pub fn memory_swap(mut self, bytes: impl Into<Option<i64>>) -> Self {
        self.config.memory_swap = bytes.into();
        self
    }

    pub fn cpu_shares(mut self, shares: impl Into<Option<i64>>) -> Self {
        self.config.cpu_shares = shares.into();
        self
    }

    pub fn cpuset_cpus(mut self, cpus: impl Into<Option<String>>) -> Self {
        self.config.cpuset_cpus = cpus.into();
        self
    }

    pub fn cpu_quota(mut self, quota: impl Into<Option<i64>>) -> Self {
        self.config.cpu_quota = quota.into();
        self
    }

    pub fn cgroup_parent(mut self, parent: impl Into<Option<String>>) -> Self {
        self.config.cgroup_parent = parent.into();
        self
    }

    pub fn restart_policy(mut self, policy: impl Into<Option<RestartPolicy>>) -> Self {
        self.config.restart_policy = policy.into();
        self
    }

    pub fn log_config(mut self, log_config: impl Into<Option<LogConfig>>) -> Self {
        self.config.log_config = log_config.into();
        self
    }

    pub fn ipc_mode(mut self, mode: impl Into<Option<String>>) -> Self {
        self.config.ipc_mode = mode.into();
        self
    }

    /// Finish the config. Fields are taken as-is; nothing is cross-checked.
    pub fn build(self) -> HostConfig {
        tracing::trace!(config = %self.config, "built host config");
        self.config
    }
}
