//! Create, update and delete named profiles in the config file.
//!
//! Each operation loads the whole [`ConfigSet`], changes it in memory and
//! writes all of it back. Nothing is written when an operation fails.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::profile::validate_name;
use crate::config::{Codec, ConfigRepository, ConfigSet, Credentials, Profile, ProfilePatch, Storage};
use crate::error::AppResult;

/// Field values for a new profile. Defaults are filled in by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub base_url: String,
    pub feed_url: String,
    pub key: String,
    pub passphrase: String,
    pub secret: String,
    pub bind_address: String,
    pub port: u16,
    pub server_secret: String,
}

impl From<ProfileFields> for Profile {
    fn from(fields: ProfileFields) -> Self {
        Self {
            base_url: fields.base_url,
            feed_url: fields.feed_url,
            auth: Credentials {
                key: fields.key,
                passphrase: fields.passphrase,
                secret: fields.secret,
            },
            server_ip: fields.bind_address,
            server_port: fields.port,
            server_secret: fields.server_secret,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub name: String,
    pub fields: ProfileFields,
    pub make_current: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// What a mutation did, for reporting back to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileChange {
    pub action: ChangeKind,
    pub profile: String,
    pub current: Option<String>,
    pub config_file: PathBuf,
    pub created_file: bool,
    pub removed: bool,
}

impl ProfileChange {
    fn new<S: Storage, C: Codec>(
        action: ChangeKind,
        profile: &str,
        config_set: &ConfigSet,
        repository: &ConfigRepository<S, C>,
    ) -> Self {
        Self {
            action,
            profile: profile.to_string(),
            current: config_set.current().map(str::to_string),
            config_file: repository.path().to_path_buf(),
            created_file: false,
            removed: false,
        }
    }

    pub fn is_current(&self) -> bool {
        self.current.as_deref() == Some(self.profile.as_str())
    }
}

pub struct ProfileService;

impl ProfileService {
    /// Adds a profile, creating the config file when it does not exist yet.
    pub fn create<S: Storage, C: Codec>(
        repository: &ConfigRepository<S, C>,
        request: CreateRequest,
    ) -> AppResult<ProfileChange> {
        let name = validate_name(&request.name)?.to_string();
        let existing = repository.try_load()?;
        let created_file = existing.is_none();
        let mut config_set = existing.unwrap_or_default();

        config_set.add_profile(&name, request.fields.into(), request.make_current)?;

        if created_file {
            repository.create(&config_set)?;
        } else {
            repository.save(&config_set)?;
        }
        tracing::info!(profile = %name, "created profile");

        let mut change = ProfileChange::new(ChangeKind::Created, &name, &config_set, repository);
        change.created_file = created_file;
        Ok(change)
    }

    pub fn update<S: Storage, C: Codec>(
        repository: &ConfigRepository<S, C>,
        name: &str,
        patch: &ProfilePatch,
    ) -> AppResult<ProfileChange> {
        let mut config_set = repository.load()?;
        let target = config_set.update_profile(name, patch)?;
        repository.save(&config_set)?;
        let renamed = target != name;
        tracing::info!(profile = %target, renamed, "updated profile");

        Ok(ProfileChange::new(
            ChangeKind::Updated,
            &target,
            &config_set,
            repository,
        ))
    }

    /// Removes a profile. A name that is not present still rewrites the file.
    pub fn delete<S: Storage, C: Codec>(
        repository: &ConfigRepository<S, C>,
        name: &str,
    ) -> AppResult<ProfileChange> {
        let name = validate_name(name)?;
        let mut config_set = repository.load()?;
        let removed = config_set.remove_profile(name).is_some();
        repository.save(&config_set)?;

        if removed && config_set.current() == Some(name) {
            tracing::warn!(profile = name, "deleted the current profile, which stays selected");
        }
        tracing::info!(profile = name, removed, "deleted profile");

        let mut change = ProfileChange::new(ChangeKind::Deleted, name, &config_set, repository);
        change.removed = removed;
        Ok(change)
    }
}
