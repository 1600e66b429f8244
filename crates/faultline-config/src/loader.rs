use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is not absolute or the log
    /// filter is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_health_config()?;
        self.validate_telemetry_config()?;
        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        Ok(())
    }

    fn validate_telemetry_config(&self) -> anyhow::Result<()> {
        if self.telemetry.filter.trim().is_empty() {
            anyhow::bail!("telemetry.filter must not be empty");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::net::SocketAddr;

    use crate::{Config, LogFormat};

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.server.listen_address, None);
        assert!(config.server.health.enabled);
        assert_eq!(config.server.health.path, "/health");
        assert_eq!(config.telemetry.filter, "info");
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn full_config() {
        let toml = r#"
            [server]
            listen_address = "127.0.0.1:8080"

            [server.health]
            enabled = false
            path = "/healthz"

            [telemetry]
            filter = "warn,faultline_core=debug"
            format = "json"
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(
            config.server.listen_address,
            Some(SocketAddr::from(([127, 0, 0, 1], 8080)))
        );
        assert!(!config.server.health.enabled);
        assert_eq!(config.server.health.path, "/healthz");
        assert_eq!(config.telemetry.filter, "warn,faultline_core=debug");
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = Config::from_toml("[server]\nlisten = \"127.0.0.1:1\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"), "{err}");
    }

    #[test]
    fn panic_catching_cannot_be_disabled() {
        let err = Config::from_toml("[server.errors]\ncatch_panics = false").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"), "{err}");
    }

    #[test]
    fn relative_health_path_is_rejected() {
        let err = Config::from_toml("[server.health]\npath = \"health\"").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"), "{err}");
    }

    #[test]
    fn empty_filter_is_rejected() {
        let err = Config::from_toml("[telemetry]\nfilter = \"  \"").unwrap_err();
        assert!(err.to_string().contains("telemetry.filter"), "{err}");
    }

    #[test]
    fn load_expands_env_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[telemetry]\nfilter = \"{{{{ env.FL_LOADER_FILTER }}}}\"").unwrap();

        temp_env::with_var("FL_LOADER_FILTER", Some("debug"), || {
            let config = Config::load(file.path()).unwrap();
            assert_eq!(config.telemetry.filter, "debug");
        });
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(std::path::Path::new("/nonexistent/faultline.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"), "{err}");
    }
}
