use std::io;

use crate::error::AppResult;

use super::profile::ConfigSet;

/// Turns a [`ConfigSet`] into the bytes stored on disk and back.
pub trait Codec {
    fn encode(&self, config_set: &ConfigSet) -> AppResult<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> AppResult<ConfigSet>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn encode(&self, config_set: &ConfigSet) -> AppResult<Vec<u8>> {
        let payload = serde_yaml::to_string(config_set).map_err(io::Error::other)?;
        Ok(payload.into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> AppResult<ConfigSet> {
        // A freshly created file has no document at all.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ConfigSet::default());
        }

        // `~`, `null` and a bare `---` are empty documents too.
        let config_set: Option<ConfigSet> = serde_yaml::from_slice(bytes)?;
        Ok(config_set.unwrap_or_default())
    }
}
