use std::fs::File;
use std::io::Read;
use json_comments::StripComments;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dict::hash::HashFunction;
use crate::dict::lib::{DICT_DEFAULT_LOAD_FACTOR, DICT_HT_INITIAL_SIZE};

pub const DICT_CONFIG_JSON: &str = "./dict_config.json";
pub const DICT_CONFIG_TOML: &str = "./dict_config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictConfig {
    #[serde(default = "initial_capacity")]
    pub initial_capacity: usize,
    #[serde(default = "load_factor")]
    pub load_factor: f64,
    #[serde(default)]
    pub hash_function: HashFunction,
}

fn initial_capacity() -> usize {
    DICT_HT_INITIAL_SIZE
}

fn load_factor() -> f64 {
    DICT_DEFAULT_LOAD_FACTOR
}

impl Default for DictConfig {
    fn default() -> Self {
        Self {
            initial_capacity: initial_capacity(),
            load_factor: load_factor(),
            hash_function: HashFunction::default(),
        }
    }
}

impl DictConfig {
    /// Reads `path`, or the default json/toml locations, falling back to defaults.
    pub fn new(path: Option<&str>) -> Self {
        let config_path_show;
        let mut file = if let Some(path) = path {
            config_path_show = path;
            if let Ok(file) = File::open(path) {
                file
            } else {
                warn!("Config File: {} Read Fail, Use Default Config.", config_path_show);
                return DictConfig::default();
            }
        } else if let Ok(file) = File::open(DICT_CONFIG_JSON) {
            config_path_show = DICT_CONFIG_JSON;
            file
        } else if let Ok(file) = File::open(DICT_CONFIG_TOML) {
            config_path_show = DICT_CONFIG_TOML;
            file
        } else {
            info!("Config File: {} Not Found, Use Default Config.", DICT_CONFIG_JSON);
            return DictConfig::default();
        };
        let mut config_string = String::new();
        if let Err(e) = file.read_to_string(&mut config_string) {
            warn!("Config File: {} Read Fail {e}, Use Default Config.", config_path_show);
            return DictConfig::default();
        }
        info!("Config File: {}", config_path_show);
        Self::parse(&config_string).unwrap_or_else(|| {
            warn!("Config File: {} Parse Fail, Use Default Config.", config_path_show);
            DictConfig::default()
        })
    }

    /// Parses TOML, then JSON with comments stripped.
    pub fn parse(content: &str) -> Option<Self> {
        if let Ok(config) = toml::from_str(content) {
            return Some(config);
        }
        let content = StripComments::new(content.as_bytes());
        serde_json::from_reader(content).ok()
    }
}

#[cfg(test)]
mod config_test {
    use super::*;
    use std::fs;

    #[test]
    fn parse_toml() {
        let config = DictConfig::parse("initial_capacity = 32\nload_factor = 0.5\nhash_function = \"city\"\n").unwrap();
        assert_eq!(config.initial_capacity, 32);
        assert_eq!(config.load_factor, 0.5);
        assert!(matches!(config.hash_function, HashFunction::City));
    }

    #[test]
    fn parse_json_with_comments() {
        let content = r#"{
            // grow late
            "load_factor": 1.0,
            "hash_function": "additive"
        }"#;
        let config = DictConfig::parse(content).unwrap();
        assert_eq!(config.initial_capacity, DICT_HT_INITIAL_SIZE);
        assert_eq!(config.load_factor, 1.0);
        assert!(matches!(config.hash_function, HashFunction::Additive));
    }

    #[test]
    fn parse_empty_uses_defaults() {
        let config = DictConfig::parse("").unwrap();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.load_factor, 0.75);
    }

    #[test]
    fn parse_garbage_fails() {
        assert!(DictConfig::parse("initial_capacity = [").is_none());
        assert!(DictConfig::parse(r#"{"hash_function": "sha256"}"#).is_none());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = DictConfig::new(Some("./no/such/dict_config.toml"));
        assert_eq!(config.initial_capacity, DICT_HT_INITIAL_SIZE);
        assert_eq!(config.load_factor, DICT_DEFAULT_LOAD_FACTOR);
    }

    #[test]
    fn read_from_file() {
        let path = std::env::temp_dir().join(format!("tinyhash_config_{}.toml", std::process::id()));
        fs::write(&path, "initial_capacity = 4\n").unwrap();
        let config = DictConfig::new(path.to_str());
        fs::remove_file(&path).unwrap();
        assert_eq!(config.initial_capacity, 4);
        assert_eq!(config.load_factor, DICT_DEFAULT_LOAD_FACTOR);
    }
}
