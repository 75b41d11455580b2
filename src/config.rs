use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::ScoreRules;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub web_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            web_root: PathBuf::from("web"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FortuneConfig {
    pub scoring: ScoreRules,
    pub server: ServerConfig,
}

impl FortuneConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                FortuneConfig::default()
            }
        } else {
            FortuneConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| format!("failed to create config dir: {}", err))?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("FORTUNE_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = env::var("FORTUNE_PORT") {
            if let Ok(value) = port.trim().parse::<u16>() {
                self.server.port = value;
            }
        }
        if let Ok(web_root) = env::var("FORTUNE_WEB_ROOT") {
            if !web_root.trim().is_empty() {
                self.server.web_root = PathBuf::from(web_root);
            }
        }
        if let Ok(base_min) = env::var("FORTUNE_BASE_MIN") {
            if let Ok(value) = base_min.trim().parse::<i32>() {
                self.scoring.base_min = value;
            }
        }
        if let Ok(base_max) = env::var("FORTUNE_BASE_MAX") {
            if let Ok(value) = base_max.trim().parse::<i32>() {
                self.scoring.base_max = value;
            }
        }
        if let Ok(scale) = env::var("FORTUNE_ALMANAC_SCALE") {
            if let Ok(value) = scale.trim().parse::<f64>() {
                if value.is_finite() {
                    self.scoring.almanac_scale = value;
                }
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    env::var("FORTUNE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/fortune.toml")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("mahjong-fortune-{}-{}", name, std::process::id()))
            .join("fortune.toml")
    }

    #[test]
    fn write_then_load_keeps_values() {
        let path = scratch_path("roundtrip");
        let mut config = FortuneConfig::default();
        config.scoring.base_min = 50;
        config.scoring.base_max = 80;
        config.server.port = 9000;
        config.write(&path).expect("write config");

        let (loaded, loaded_path) = FortuneConfig::load(Some(path.clone())).expect("load config");
        assert_eq!(loaded_path.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.scoring.base_min, 50);
        assert_eq!(loaded.scoring.base_max, 80);
        assert_eq!(loaded.server.port, 9000);
        let _ = std::fs::remove_dir_all(path.parent().expect("scratch dir"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = scratch_path("missing");
        let (config, _) = FortuneConfig::load(Some(path)).expect("defaults");
        assert_eq!(config.scoring.strength_floor, -4);
        assert_eq!(config.scoring.levels.great, 90);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: FortuneConfig = toml::from_str("[server]\nhost = \"0.0.0.0\"\n").expect("parse");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.scoring.base_min, 58);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_path("malformed");
        std::fs::create_dir_all(path.parent().expect("scratch dir")).expect("mkdir");
        std::fs::write(&path, "scoring = [").expect("write");
        let err = FortuneConfig::load(Some(path.clone())).expect_err("parse error");
        assert!(err.starts_with("failed to parse config"));
        let _ = std::fs::remove_dir_all(path.parent().expect("scratch dir"));
    }
}
