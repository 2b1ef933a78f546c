#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ChatEndpointURL,
    CodeEndpointURL,
    RequestTimeout,
    StoreURL,
}

impl ConfigKey {
    fn env_var(&self) -> String {
        return format!(
            "APPFORGE_{}",
            self.to_string().replace('-', "_").to_uppercase()
        );
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ChatEndpointURL => "http://localhost:3000/api/ai-chat",
            ConfigKey::CodeEndpointURL => "http://localhost:3000/api/gen-ai-code",
            // Milliseconds. The completion endpoints define no timeout of
            // their own, so the client supplies one.
            ConfigKey::RequestTimeout => "30000",
            ConfigKey::StoreURL => "http://localhost:3000/api/store",
        };

        return res.to_string();
    }

    /// Seeds every key with its default, then applies `APPFORGE_*` environment
    /// overrides. Individual keys can still be replaced afterwards with
    /// [`Config::set`].
    pub fn load() {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));

            if let Ok(val) = env::var(key.env_var()) {
                Config::set(key, &val);
            }
        }
    }
}
