// ABOUTME: Nested wire types carried inside a host config.
// ABOUTME: Port bindings, device mappings, and log driver configuration.

mod device;
mod log_config;
mod port_binding;

pub use device::Device;
pub use log_config::LogConfig;
pub use port_binding::PortBinding;
