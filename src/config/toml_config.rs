use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DrawError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub draw: Option<DrawConfig>,
    pub participants: Option<ParticipantsConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawConfig {
    pub min_participants: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantsConfig {
    #[serde(default)]
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrawError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after substituting `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrawError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrawError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn min_participants(&self) -> Option<usize> {
        self.draw.as_ref().and_then(|d| d.min_participants)
    }

    fn seed(&self) -> Option<u64> {
        self.draw.as_ref().and_then(|d| d.seed)
    }

    fn participants(&self) -> Vec<String> {
        self.participants
            .as_ref()
            .map(|p| p.names.clone())
            .unwrap_or_default()
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    fn json_logs(&self) -> Option<bool> {
        self.logging.as_ref().and_then(|l| l.json)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(min) = self.min_participants() {
            validate_positive_number(
                "draw.min_participants",
                min,
                crate::core::draw::MIN_PARTICIPANTS,
            )?;
        }
        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[draw]
min_participants = 4
seed = 11

[participants]
names = ["Ana", "Bia", "Caio", "Duda"]

[output]
format = "csv"
path = "./draw.csv"

[logging]
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.min_participants(), Some(4));
        assert_eq!(config.seed(), Some(11));
        assert_eq!(config.participants().len(), 4);
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
        assert_eq!(config.output_path(), Some("./draw.csv"));
        assert_eq!(config.json_logs(), Some(true));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_sets_nothing() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.min_participants(), None);
        assert!(config.participants().is_empty());
        assert_eq!(config.output_format(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SECRET_FRIEND_TEST_OUTPUT", "/tmp/result.json");

        let toml_content = r#"
[output]
path = "${SECRET_FRIEND_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/result.json"));

        std::env::remove_var("SECRET_FRIEND_TEST_OUTPUT");
    }

    #[test]
    fn test_unknown_env_var_left_verbatim() {
        let toml_content = r#"
[output]
path = "${SECRET_FRIEND_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.output_path(),
            Some("${SECRET_FRIEND_SURELY_UNSET_VAR}")
        );
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[draw]\nmin_participants = 2\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = TomlConfig::from_toml_str("[draw\nseed = ");
        assert!(matches!(result, Err(DrawError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[participants]
names = ["João", "Maria", "Pedro"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.participants(), vec!["João", "Maria", "Pedro"]);
    }
}
