// ABOUTME: Library root for hostconfig - the host-level container configuration model.
// ABOUTME: The command-line front end is in main.rs.

pub mod codec;
pub mod error;
pub mod host_config;
pub mod types;

pub use host_config::{
    Bind, BindBuilder, BindFrom, BindTo, HostConfig, HostConfigBuilder, LxcConfParameter,
    PortBindings, RawRestartPolicy, RestartPolicy,
};
