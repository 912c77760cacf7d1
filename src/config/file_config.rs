use crate::core::ConfigProvider;
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub server: ServerSection,
    pub data: DataSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub listen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSection {
    pub lanes_file: String,
    pub series_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references with environment values; unknown
    /// variables are left as-is so validation reports them in context.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}

impl ConfigProvider for FileConfig {
    fn listen_addr(&self) -> &str {
        &self.server.listen
    }

    fn lanes_file(&self) -> &str {
        &self.data.lanes_file
    }

    fn series_file(&self) -> &str {
        &self.data.series_file
    }

    fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_listen_addr("server.listen", &self.server.listen)?;
        validation::validate_path("data.lanes_file", &self.data.lanes_file)?;
        validation::validate_path("data.series_file", &self.data.series_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[server]
listen = "127.0.0.1:4000"

[data]
lanes_file = "data/lanes.json"
series_file = "data/series.json"

[logging]
verbose = true
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:4000");
        assert_eq!(config.lanes_file(), "data/lanes.json");
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LANE_DECK_TEST_LISTEN", "0.0.0.0:9100");

        let toml_content = r#"
[server]
listen = "${LANE_DECK_TEST_LISTEN}"

[data]
lanes_file = "data/lanes.json"
series_file = "data/series.json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9100");

        std::env::remove_var("LANE_DECK_TEST_LISTEN");
    }

    #[test]
    fn test_invalid_listen_addr_fails_validation() {
        let toml_content = r#"
[server]
listen = "not-an-address"

[data]
lanes_file = "data/lanes.json"
series_file = "data/series.json"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
listen = "127.0.0.1:3000"

[data]
lanes_file = "lanes.json"
series_file = "series.json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_malformed_toml_is_a_config_error() {
        let result = FileConfig::from_toml_str("[server");
        assert!(matches!(
            result,
            Err(DashboardError::ConfigError { .. })
        ));
    }
}
