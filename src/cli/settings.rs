//! `set` / `unset` handlers for the config file.

use crate::core::config::{Config, ConfigError, ConfigKey};

/// Apply `set <key> <value...>` and return the confirmation line.
/// Multi-word values are joined with spaces.
pub fn apply_set(config: &mut Config, key: &str, value: &[String]) -> Result<String, ConfigError> {
    let key: ConfigKey = key.parse()?;
    let value = value.join(" ");
    config.set_value(key, &value)?;
    Ok(format!("✅ Set {} to: {}", key.as_str(), value))
}

pub fn apply_unset(config: &mut Config, key: &str) -> Result<String, ConfigError> {
    let key: ConfigKey = key.parse()?;
    config.unset_value(key);
    Ok(format!("✅ Unset {}", key.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn set_joins_multi_word_values() {
        let mut config = Config::default();
        let message = apply_set(&mut config, "greeting", &args(&["Welcome", "back!"])).unwrap();
        assert_eq!(message, "✅ Set greeting to: Welcome back!");
        assert_eq!(config.greeting(), "Welcome back!");
    }

    #[test]
    fn set_validates_endpoint() {
        let mut config = Config::default();
        assert!(apply_set(&mut config, "endpoint", &args(&["localhost:8000"])).is_err());
        apply_set(&mut config, "endpoint", &args(&["http://localhost:8000/chat"])).unwrap();
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8000/chat"));
    }

    #[test]
    fn unset_clears_value() {
        let mut config = Config {
            sidebar: Some(false),
            ..Default::default()
        };
        assert_eq!(apply_unset(&mut config, "sidebar").unwrap(), "✅ Unset sidebar");
        assert_eq!(config.sidebar, None);
    }

    #[test]
    fn unknown_keys_fail_without_changes() {
        let mut config = Config::default();
        assert!(matches!(
            apply_set(&mut config, "theme", &args(&["dark"])),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(apply_unset(&mut config, "theme").is_err());
        assert_eq!(config, Config::default());
    }
}
