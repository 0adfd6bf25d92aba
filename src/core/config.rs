use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::publish::Credentials;

/// Tool configuration loaded from `.scanfix.yml` in the working directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub github: Option<GithubConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubConfig {
    pub token: Option<String>,
    pub user: Option<String>,
}

impl Config {
    pub fn load(dir: &Path) -> Self {
        let config_path = dir.join(".scanfix.yml");
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = serde_yaml::from_str::<Config>(&content) {
                    return config;
                }
            }
        }
        Config::default()
    }

    /// Publisher credentials, with `GITHUB_TOKEN` / `GITHUB_USER` environment
    /// variables taking precedence over the config file.
    pub fn credentials(&self) -> Credentials {
        let github = self.github.clone().unwrap_or_default();
        Credentials {
            token: std::env::var("GITHUB_TOKEN").ok().or(github.token),
            user: std::env::var("GITHUB_USER").ok().or(github.user),
        }
    }
}
