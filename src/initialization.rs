use std::env;
use std::fs;
use std::path::Path;
use serde::Deserialize;
use crate::errors::ConfigError;

const CONFIG_PATH: &str = "config.toml";
const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

#[derive(Deserialize)]
#[serde(default)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for WebServer {
    fn default() -> Self {
        WebServer {
            bind_address: "0.0.0.0".to_string(),
            bind_port: 3002,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
pub struct OpenWeather {
    pub base_url: String,
    pub timeout: u64,
}

impl Default for OpenWeather {
    fn default() -> Self {
        OpenWeather {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            timeout: 30,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub web_server: WebServer,
    pub open_weather: OpenWeather,
}

/// Loads configuration from config.toml, falling back to defaults when the file is absent
pub fn config() -> Result<Config, ConfigError> {
    if Path::new(CONFIG_PATH).exists() {
        let raw = fs::read_to_string(CONFIG_PATH)?;
        Ok(toml::from_str(&raw)?)
    } else {
        Ok(Config::default())
    }
}

/// Reads the provider credential from the process environment.
/// The credential stays server side and must never reach a response or a log line.
pub fn api_key() -> Option<String> {
    env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty())
}
