use crate::core::defaults::DEVELOPMENT_NETWORK;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_SETTINGS: Lazy<Settings> = Lazy::new(Settings::new);

const CONFIG_PATH_KEY: &str = "CONFIG_PATH";
const ACTIVE_NETWORK_KEY: &str = "ACTIVE_NETWORK";

/// Environment variable naming an explicit project file path
pub const CONFIG_PATH_ENV: &str = "CHAINSMITH_CONFIG";
/// Environment variable selecting the active network profile
pub const ACTIVE_NETWORK_ENV: &str = "CHAINSMITH_NETWORK";

pub struct Settings {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Settings {
        let mut map = HashMap::new();

        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            map.insert(String::from(CONFIG_PATH_KEY), path);
        }

        // Default to the development profile if not provided
        let mut active_network = String::from(DEVELOPMENT_NETWORK);
        if let Ok(name) = env::var(ACTIVE_NETWORK_ENV) {
            active_network = name;
        }
        map.insert(String::from(ACTIVE_NETWORK_KEY), active_network);

        Settings {
            inner: RwLock::new(map),
        }
    }

    pub fn get_config_path(&self) -> Option<String> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on settings - this should never happen");
        inner.get(CONFIG_PATH_KEY).cloned()
    }

    pub fn set_config_path(&self, path: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on settings - this should never happen");
        inner.insert(String::from(CONFIG_PATH_KEY), path);
    }

    pub fn has_custom_config_path(&self) -> bool {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on settings - this should never happen");
        inner.contains_key(CONFIG_PATH_KEY)
    }

    pub fn get_active_network(&self) -> String {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on settings - this should never happen");
        inner
            .get(ACTIVE_NETWORK_KEY)
            .expect("Active network should always be present in settings")
            .clone()
    }

    pub fn set_active_network(&self, name: String) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on settings - this should never happen");
        inner.insert(String::from(ACTIVE_NETWORK_KEY), name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_network_round_trip() {
        let settings = Settings::new();
        settings.set_active_network("staging".to_string());
        assert_eq!(settings.get_active_network(), "staging");
    }

    #[test]
    fn test_config_path_round_trip() {
        let settings = Settings::new();
        settings.set_config_path("/tmp/chainsmith.toml".to_string());
        assert!(settings.has_custom_config_path());
        assert_eq!(
            settings.get_config_path(),
            Some("/tmp/chainsmith.toml".to_string())
        );
    }
}
