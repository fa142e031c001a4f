//! Minimal TOML-subset parser for runtime configuration
//!
//! Supported:
//! - `[debounce]` and `[scheduler]` section headers
//! - `key = integer` pairs (decimal, `_` separators allowed)
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys missing from the text keep their defaults. Anything else is an
//! error; a board file with a typo should not boot with silent defaults.

use super::types::RuntimeConfig;
use crate::error::ConfigError;
use crate::time::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Debounce,
    Scheduler,
}

/// Parse config text into a validated [`RuntimeConfig`]
pub fn parse_config(input: &str) -> Result<RuntimeConfig, ConfigError> {
    let mut config = RuntimeConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or(ConfigError::Malformed)?;
            section = parse_section_header(name)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::Malformed)?;
        apply_value(&mut config, section, key, value)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ConfigError> {
    match name.trim() {
        "debounce" => Ok(Section::Debounce),
        "scheduler" => Ok(Section::Scheduler),
        _ => Err(ConfigError::UnknownSection),
    }
}

fn apply_value(
    config: &mut RuntimeConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let slot = match (section, key) {
        (Section::Debounce, "settle_ms") => &mut config.debounce.settle_ms,
        (Section::Debounce, "release_hold_ms") => &mut config.debounce.release_hold_ms,
        (Section::Scheduler, "status_interval_ms") => &mut config.scheduler.status_interval_ms,
        _ => return Err(ConfigError::UnknownKey),
    };
    *slot = parse_millis(value)?;
    Ok(())
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse a non-negative decimal integer, allowing `_` between digits
fn parse_millis(value: &str) -> Result<Millis, ConfigError> {
    let bytes = value.as_bytes();
    if bytes.first() == Some(&b'_') || bytes.last() == Some(&b'_') {
        return Err(ConfigError::InvalidValue);
    }

    let mut result: Millis = 0;
    let mut digits = 0;
    for &b in bytes {
        match b {
            b'0'..=b'9' => {
                result = result
                    .checked_mul(10)
                    .and_then(|r| r.checked_add(Millis::from(b - b'0')))
                    .ok_or(ConfigError::InvalidValue)?;
                digits += 1;
            }
            b'_' => {}
            _ => return Err(ConfigError::InvalidValue),
        }
    }

    if digits == 0 {
        return Err(ConfigError::InvalidValue);
    }
    Ok(result)
}
