// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::options::{OptionValue, Options};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub proxy: ProxyConfig,
    /// Named option sets, applied in declaration order
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub presets: BTreeMap<String, serde_yaml::Mapping>,
}

/// Where the proxy lives and how URLs for it are signed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyConfig {
    pub base_url: String,
    /// Hex-encoded HMAC key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Hex-encoded HMAC salt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(default = "default_encode_source")]
    pub encode_source: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_signature: Option<String>,
}

fn default_encode_source() -> bool {
    true
}

impl ProxyConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            key: None,
            salt: None,
            encode_source: default_encode_source(),
            custom_signature: None,
        }
    }
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self> {
        // Replace ${VAR_NAME} with environment variable values
        let re =
            Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| Error::config(e.to_string()))?;

        let mut values = BTreeMap::new();
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            let value = std::env::var(var_name).map_err(|_| {
                Error::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
            values.insert(var_name.to_string(), value);
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            values.get(&caps[1]).cloned().unwrap_or_default()
        });

        serde_yaml::from_str(&substituted).map_err(|e| Error::config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if self.proxy.base_url.trim().is_empty() {
            return Err(Error::config("proxy.base_url cannot be empty"));
        }

        let has_key = self.proxy.key.as_deref().is_some_and(|k| !k.is_empty());
        let has_salt = self.proxy.salt.as_deref().is_some_and(|s| !s.is_empty());
        if has_key != has_salt {
            tracing::warn!(
                has_key,
                has_salt,
                "Only one of proxy.key and proxy.salt is set; URLs will be unsigned"
            );
        }

        for (name, preset) in &self.presets {
            if name.is_empty() {
                return Err(Error::config("Preset name cannot be empty"));
            }
            if let Some((key, _)) = preset.iter().find(|(k, _)| k.as_str().is_none()) {
                return Err(Error::config(format!(
                    "Preset '{}' has non-string option name {:?}",
                    name, key
                )));
            }
        }

        Ok(())
    }

    /// Build [`Options`] from a named preset
    pub fn preset(&self, name: &str) -> Result<Options> {
        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| Error::config(format!("Unknown preset '{}'", name)))?;

        let mut pairs = Vec::with_capacity(preset.len());
        for (key, value) in preset {
            let Some(key) = key.as_str() else {
                return Err(Error::config(format!(
                    "Preset '{}' has non-string option name {:?}",
                    name, key
                )));
            };
            let value: OptionValue = serde_yaml::from_value(value.clone()).map_err(|e| {
                Error::config(format!("Preset '{}' option '{}': {}", name, key, e))
            })?;
            pairs.push((key, value));
        }

        Ok(Options::from_map(pairs))
    }
}
