use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

/// Presentation-only settings. Board size and the computer's strength are
/// fixed by the engine and deliberately not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub human_name: String,
    pub computer_name: String,
    #[serde(default = "default_highlight")]
    pub highlight_winning_line: bool,
}

fn default_highlight() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            human_name: "User".to_string(),
            computer_name: "AI".to_string(),
            highlight_winning_line: true,
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.human_name.trim().is_empty() {
            return Err("human_name must not be empty".to_string());
        }
        if self.computer_name.trim().is_empty() {
            return Err("computer_name must not be empty".to_string());
        }
        Ok(())
    }

    /// Loads the config from `path`, or from the default file next to the
    /// working directory when no path is given. A missing file falls back to
    /// defaults; a present but unreadable or invalid file is an error.
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        let explicit = path.is_some();
        let file_path = path.unwrap_or(DEFAULT_CONFIG_FILE);

        let content = match std::fs::read_to_string(file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("Failed to read config {}: {}", file_path, e)),
        };

        let config = Self::from_yaml(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunnerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = "human_name: Alice\ncomputer_name: HAL\nhighlight_winning_line: false\n";
        let config = RunnerConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.human_name, "Alice");
        assert_eq!(config.computer_name, "HAL");
        assert!(!config.highlight_winning_line);
    }

    #[test]
    fn test_highlight_defaults_to_true_when_omitted() {
        let yaml = "human_name: Alice\ncomputer_name: HAL\n";
        let config = RunnerConfig::from_yaml(yaml).unwrap();
        assert!(config.highlight_winning_line);
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let config = RunnerConfig {
            human_name: "  ".to_string(),
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_default_file_falls_back_to_defaults() {
        let config = RunnerConfig::load(None).unwrap_or_default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = RunnerConfig::load(Some("definitely_not_here_12345.yaml"));
        assert!(result.is_err());
    }
}
