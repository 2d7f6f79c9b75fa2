use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api-public.sandbox.pro.coinbase.com";
pub const DEFAULT_FEED_URL: &str = "wss://ws-feed-public.sandbox.pro.coinbase.com";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 80;
pub const DEFAULT_SERVER_SECRET: &str = "default";

/// Everything persisted in the config file: all profiles plus the active one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSet {
    /// Name of the active profile. Empty when none has been chosen yet, and
    /// not guaranteed to name an existing profile.
    #[serde(rename = "Current", default)]
    pub current: String,
    #[serde(rename = "Configs", default)]
    pub profiles: BTreeMap<String, Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "BaseURL", default)]
    pub base_url: String,
    #[serde(rename = "FeedURL", default)]
    pub feed_url: String,
    #[serde(rename = "Auth", default)]
    pub auth: Credentials,
    #[serde(rename = "ServerIP", default)]
    pub server_ip: String,
    #[serde(rename = "ServerPort", default)]
    pub server_port: u16,
    #[serde(rename = "ServerSecret", default)]
    pub server_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "Key", default)]
    pub key: String,
    #[serde(rename = "Passphrase", default)]
    pub passphrase: String,
    #[serde(rename = "Secret", default)]
    pub secret: String,
}

/// Sparse update of a single profile. `None` leaves a field untouched;
/// `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub base_url: Option<String>,
    pub feed_url: Option<String>,
    pub key: Option<String>,
    pub passphrase: Option<String>,
    pub secret: Option<String>,
    pub server_ip: Option<String>,
    pub server_port: Option<u16>,
    pub server_secret: Option<String>,
    pub rename: Option<String>,
    pub make_current: bool,
}

/// Rejects blank names. Anything else is used verbatim as the map key,
/// surrounding whitespace included.
pub fn validate_name(requested: &str) -> AppResult<&str> {
    if requested.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "profile name must not be empty".to_string(),
        ));
    }

    Ok(requested)
}

impl Profile {
    pub fn apply(&mut self, patch: &ProfilePatch) {
        fn set<T: Clone>(slot: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        set(&mut self.base_url, patch.base_url.as_ref());
        set(&mut self.feed_url, patch.feed_url.as_ref());
        set(&mut self.auth.key, patch.key.as_ref());
        set(&mut self.auth.passphrase, patch.passphrase.as_ref());
        set(&mut self.auth.secret, patch.secret.as_ref());
        set(&mut self.server_ip, patch.server_ip.as_ref());
        set(&mut self.server_port, patch.server_port.as_ref());
        set(&mut self.server_secret, patch.server_secret.as_ref());
    }
}

impl ConfigSet {
    pub fn current(&self) -> Option<&str> {
        Some(self.current.as_str()).filter(|name| !name.is_empty())
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Adds a profile that must not exist yet. The first profile ever added
    /// becomes current regardless of `make_current`.
    pub fn add_profile(&mut self, name: &str, profile: Profile, make_current: bool) -> AppResult<()> {
        let name = validate_name(name)?;
        if self.contains(name) {
            return Err(AppError::Conflict(format!(
                "reticule config {name:?} already exists, use `config update reticule` to modify an existing config"
            )));
        }

        if self.profiles.is_empty() || make_current {
            self.current = name.to_string();
        }
        self.profiles.insert(name.to_string(), profile);
        Ok(())
    }

    /// Patches an existing profile and returns the name it is stored under
    /// afterwards. Renaming onto another profile's name replaces that profile.
    pub fn update_profile(&mut self, name: &str, patch: &ProfilePatch) -> AppResult<String> {
        let name = validate_name(name)?;
        let target = match patch.rename.as_deref() {
            Some(rename) => validate_name(rename)?.to_string(),
            None => name.to_string(),
        };

        let Some(mut profile) = self.profiles.remove(name) else {
            return Err(AppError::Conflict(format!(
                "reticule config {name:?} does not exist, use `config create reticule` to create a new config"
            )));
        };
        profile.apply(patch);

        if target != name && self.contains(&target) {
            tracing::warn!(from = name, to = %target, "rename replaces an existing profile");
        }

        if patch.make_current {
            self.current = target.clone();
        }
        self.profiles.insert(target.clone(), profile);
        Ok(target)
    }

    /// Removes a profile if present. `current` is left as is, even when it
    /// named the removed profile.
    pub fn remove_profile(&mut self, name: &str) -> Option<Profile> {
        self.profiles.remove(name)
    }
}
