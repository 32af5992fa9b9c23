// ABOUTME: Integration tests for HostConfigBuilder setter semantics.
// ABOUTME: Covers list dedup, empty-input no-ops, append, scalar clearing, and port maps.

use hostconfig::types::{Device, PortBinding};
use hostconfig::{Bind, HostConfig, LxcConfParameter};
use std::collections::{BTreeMap, HashMap};

mod list_setters {
    use super::*;

    #[test]
    fn binds_drop_later_duplicates_in_order() {
        let config = HostConfig::builder()
            .binds(["/a:/a", "/b:/b", "/a:/a", "/c:/c", "/b:/b"])
            .build();
        assert_eq!(config.binds().unwrap(), ["/a:/a", "/b:/b", "/c:/c"]);
    }

    #[test]
    fn every_string_list_is_deduplicated() {
        let dup = ["x", "y", "x"];
        let config = HostConfig::builder()
            .links(dup)
            .dns(dup)
            .dns_search(dup)
            .extra_hosts(dup)
            .volumes_from(dup)
            .cap_add(dup)
            .cap_drop(dup)
            .security_opt(dup)
            .build();

        let expected = ["x", "y"];
        assert_eq!(config.links().unwrap(), expected);
        assert_eq!(config.dns().unwrap(), expected);
        assert_eq!(config.dns_search().unwrap(), expected);
        assert_eq!(config.extra_hosts().unwrap(), expected);
        assert_eq!(config.volumes_from().unwrap(), expected);
        assert_eq!(config.cap_add().unwrap(), expected);
        assert_eq!(config.cap_drop().unwrap(), expected);
        assert_eq!(config.security_opt().unwrap(), expected);
    }

    #[test]
    fn structured_lists_are_deduplicated_by_value() {
        let fuse = Device::new("/dev/fuse", "/dev/fuse", "rwm");
        let kvm = Device::new("/dev/kvm", "/dev/kvm", "rw");
        let param = LxcConfParameter::new("lxc.aa_profile", "unconfined");

        let config = HostConfig::builder()
            .devices(vec![fuse.clone(), kvm.clone(), fuse.clone()])
            .lxc_conf(vec![param.clone(), param.clone()])
            .build();

        assert_eq!(config.devices().unwrap(), [fuse, kvm]);
        assert_eq!(config.lxc_conf().unwrap(), [param]);
    }

    #[test]
    fn replace_overwrites_previous_list() {
        let config = HostConfig::builder()
            .dns(["8.8.8.8"])
            .dns(["1.1.1.1", "9.9.9.9"])
            .build();
        assert_eq!(config.dns().unwrap(), ["1.1.1.1", "9.9.9.9"]);
    }

    #[test]
    fn empty_input_leaves_list_untouched() {
        let config = HostConfig::builder()
            .cap_add(["NET_ADMIN"])
            .cap_add(Vec::<String>::new())
            .build();
        assert_eq!(config.cap_add().unwrap(), ["NET_ADMIN"]);
    }

    #[test]
    fn empty_input_on_unset_list_stays_absent() {
        let config = HostConfig::builder().links(Vec::<&str>::new()).build();
        assert!(config.links().is_none());
    }

    #[test]
    fn binds_accept_bind_values() {
        let config = HostConfig::builder()
            .binds([
                Bind::from("/srv").to("/data").build(),
                Bind::to("/cache").from("cache-vol").read_only(true).build(),
            ])
            .build();
        assert_eq!(config.binds().unwrap(), ["/srv:/data", "cache-vol:/cache:ro"]);
    }
}

mod append_binds {
    use super::*;

    #[test]
    fn append_extends_existing_binds() {
        let config = HostConfig::builder()
            .binds(["/a:/a"])
            .append_binds(["/b:/b"])
            .build();
        assert_eq!(config.binds().unwrap(), ["/a:/a", "/b:/b"]);
    }

    #[test]
    fn append_removes_duplicates_across_old_and_new() {
        let config = HostConfig::builder()
            .binds(["/a:/a", "/b:/b"])
            .append_binds(["/b:/b", "/c:/c", "/a:/a", "/c:/c"])
            .build();
        assert_eq!(config.binds().unwrap(), ["/a:/a", "/b:/b", "/c:/c"]);
    }

    #[test]
    fn append_on_unset_binds_starts_a_list() {
        let config = HostConfig::builder().append_binds(["/a:/a"]).build();
        assert_eq!(config.binds().unwrap(), ["/a:/a"]);
    }

    #[test]
    fn append_accepts_bind_values() {
        let config = HostConfig::builder()
            .append_binds(["/a:/a"])
            .append_binds([Bind::from("/b").to("/b").build()])
            .build();
        assert_eq!(config.binds().unwrap(), ["/a:/a", "/b:/b"]);
    }

    #[test]
    fn binds_after_append_replace_everything() {
        let config = HostConfig::builder()
            .append_binds(["/a:/a", "/b:/b"])
            .binds(["/z:/z"])
            .build();
        assert_eq!(config.binds().unwrap(), ["/z:/z"]);
    }
}

mod scalar_setters {
    use super::*;

    #[test]
    fn none_clears_previous_value() {
        let config = HostConfig::builder()
            .memory(512)
            .memory(None)
            .network_mode("host".to_string())
            .network_mode(None)
            .privileged(true)
            .privileged(None)
            .build();
        assert_eq!(config.memory(), None);
        assert_eq!(config.network_mode(), None);
        assert_eq!(config.privileged(), None);
    }

    #[test]
    fn scalar_clear_differs_from_list_no_op() {
        let base = HostConfig::builder()
            .cpu_quota(50_000)
            .dns(["10.0.0.2"])
            .build();

        let rebuilt = base
            .to_builder()
            .cpu_quota(None)
            .dns(Vec::<String>::new())
            .build();

        assert_eq!(rebuilt.cpu_quota(), None);
        assert_eq!(rebuilt.dns().unwrap(), ["10.0.0.2"]);
    }

    #[test]
    fn falsy_values_are_kept_distinct_from_unset() {
        let config = HostConfig::builder()
            .privileged(false)
            .memory(0)
            .cgroup_parent(String::new())
            .build();
        assert_eq!(config.privileged(), Some(false));
        assert_eq!(config.memory(), Some(0));
        assert_eq!(config.cgroup_parent(), Some(""));
        assert_eq!(config.publish_all_ports(), None);
    }

    #[test]
    fn inconsistent_limits_are_not_rejected() {
        let config = HostConfig::builder()
            .memory(1024 * 1024 * 1024)
            .memory_swap(1024)
            .cpu_quota(-5)
            .cpuset_cpus("not-a-cpu-list".to_string())
            .build();
        assert_eq!(config.memory_swap(), Some(1024));
        assert_eq!(config.cpu_quota(), Some(-5));
        assert_eq!(config.cpuset_cpus(), Some("not-a-cpu-list"));
    }
}

mod port_bindings {
    use super::*;

    #[test]
    fn accepts_any_map_shape() {
        let mut ports = HashMap::new();
        ports.insert("80/tcp", vec![PortBinding::of("0.0.0.0", "8080")]);

        let config = HostConfig::builder().port_bindings(ports).build();
        let bindings = config.port_bindings().unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(
            bindings["80/tcp"],
            vec![PortBinding::of("0.0.0.0", "8080")]
        );
    }

    #[test]
    fn empty_map_leaves_bindings_untouched() {
        let config = HostConfig::builder()
            .port_bindings([("53/udp", vec![PortBinding::random_port("0.0.0.0")])])
            .port_bindings(BTreeMap::<String, Vec<PortBinding>>::new())
            .build();
        assert!(config.port_bindings().unwrap().contains_key("53/udp"));
    }

    #[test]
    fn new_map_replaces_old_one() {
        let config = HostConfig::builder()
            .port_bindings([("53/udp", vec![PortBinding::random_port("0.0.0.0")])])
            .port_bindings([("443/tcp", vec![PortBinding::of("127.0.0.1", "8443")])])
            .build();
        let bindings = config.port_bindings().unwrap();
        assert!(!bindings.contains_key("53/udp"));
        assert!(bindings.contains_key("443/tcp"));
    }

    #[test]
    fn caller_map_is_copied() {
        let mut ports = BTreeMap::new();
        ports.insert("80/tcp".to_string(), vec![PortBinding::of("0.0.0.0", "80")]);

        let config = HostConfig::builder().port_bindings(ports.clone()).build();
        ports.insert("81/tcp".to_string(), vec![]);

        assert_eq!(config.port_bindings().unwrap().len(), 1);
    }
}
