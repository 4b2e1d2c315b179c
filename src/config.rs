use std::env;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the commentary service, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_id: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model_id: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = model {
            self.model_id = model;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.api_key, None);
        assert_eq!(config.model_id, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn gemini_key_wins_over_generic_key() {
        let config = config_from(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "gemini")]);
        assert_eq!(config.api_key.as_deref(), Some("gemini"));

        let fallback = config_from(&[("API_KEY", "generic"), ("GEMINI_API_KEY", " ")]);
        assert_eq!(fallback.api_key.as_deref(), Some("generic"));
    }

    #[test]
    fn base_url_loses_trailing_slash_and_model_can_be_overridden() {
        let config = config_from(&[("GEMINI_BASE_URL", "http://localhost:8080/")])
            .with_model(Some("gemini-pro".to_string()));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.model_id, "gemini-pro");
    }
}
