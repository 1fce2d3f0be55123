use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct BingoConfig {
    pub log_file: String,
    pub goals_file: Option<String>,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            log_file: "user_activities.csv".to_string(),
            goals_file: None,
        }
    }
}

impl BingoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config_map = parse_config(&content)?;

        let log_file = config_map
            .get("log_file")
            .unwrap_or(&"user_activities.csv".to_string())
            .clone();

        let goals_file = config_map.get("goals_file").cloned();

        Ok(BingoConfig { log_file, goals_file })
    }

    pub fn load_or_default() -> Self {
        let config_path = "conf/bingo.conf";

        match Self::from_file(config_path) {
            Ok(config) => {
                println!("📄 Loaded configuration from {}", config_path);
                config
            }
            Err(e) => {
                println!("⚠️  Could not load config from {}: {}. Using defaults.", config_path, e);
                Self::default()
            }
        }
    }
}

fn parse_config(content: &str) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse key = value pairs
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            let value = value.trim().to_string();
            config.insert(key, value);
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let content = r#"
            # This is a comment
            log_file = scores/activities.csv
            # Another comment
            goals_file = conf/goals.txt
        "#;

        let config = parse_config(content).unwrap();
        assert_eq!(config.get("log_file"), Some(&"scores/activities.csv".to_string()));
        assert_eq!(config.get("goals_file"), Some(&"conf/goals.txt".to_string()));
    }

    #[test]
    fn test_bingo_config_default() {
        let config = BingoConfig::default();
        assert_eq!(config.log_file, "user_activities.csv");
        assert!(config.goals_file.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let content = "log_file = my.csv\nsomething_else = 42\n";
        let config = parse_config(content).unwrap();
        assert_eq!(config.get("log_file"), Some(&"my.csv".to_string()));
        assert_eq!(config.get("something_else"), Some(&"42".to_string()));
    }
}
