//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use faultline_config::{Config, HealthConfig, ServerConfig, TelemetryConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Disable health endpoint
    #[allow(dead_code)]
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
