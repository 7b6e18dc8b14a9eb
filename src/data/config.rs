use std::{
    env::{self, VarError},
    fs::File,
    path::PathBuf,
    sync::Arc,
};

use druid::{Data, Lens};
use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use url::Url;

const APP_NAME: &str = "Planfest";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

const DEFAULT_API_URL: &str = "https://planevent.me";

#[derive(Clone, Debug, Data, Lens, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Arc<str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        match File::open(&path) {
            Ok(file) => {
                log::info!("loading config: {:?}", &path);
                match serde_json::from_reader(file) {
                    Ok(config) => Some(config),
                    Err(err) => {
                        log::error!("failed to read config: {err}");
                        None
                    }
                }
            }
            Err(_) => None,
        }
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy URL is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }

    /// Web origin of the configured service, used to build move/share links.
    pub fn origin(&self) -> String {
        Url::parse(&self.api_url)
            .ok()
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_else(|| self.api_url.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_strips_path_and_trailing_slash() {
        let config = Config {
            api_url: "https://planevent.me/".into(),
        };
        assert_eq!(config.origin(), "https://planevent.me");
    }
}
