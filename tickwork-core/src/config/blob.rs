//! Binary config blob
//!
//! Postcard-encoded [`RuntimeConfig`] for storage in flash.

use super::types::RuntimeConfig;
use crate::error::ConfigError;

/// Upper bound on an encoded config
pub const MAX_BLOB_SIZE: usize = 32;

/// Serialize `config` into `buf`, returning the used prefix
pub fn encode<'a>(config: &RuntimeConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Encoding)
}

/// Deserialize and validate a stored config
pub fn decode(bytes: &[u8]) -> Result<RuntimeConfig, ConfigError> {
    let config: RuntimeConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Encoding)?;
    config.validate()?;
    Ok(config)
}
