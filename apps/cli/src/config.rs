use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use client_core::{
    settings::{DEFAULT_BASE_URL, DEFAULT_NAME, DEFAULT_REQUEST_TIMEOUT},
    ClientSettings, SettingsError,
};

pub const DEFAULT_CONFIG_FILE: &str = "client.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub default_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            default_name: DEFAULT_NAME.into(),
        }
    }
}

impl Settings {
    /// A zero timeout disables it.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn client_settings(&self) -> Result<ClientSettings, SettingsError> {
        Ok(ClientSettings::new(self.base_url.clone())?
            .with_timeout(self.request_timeout())
            .with_default_name(self.default_name.clone()))
    }
}

/// Defaults, then the config file, then `APP__*` environment variables.
///
/// An explicitly named file must exist; the default `client.toml` is optional.
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?,
        Err(err) if required => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()))
        }
        Err(_) => {}
    }

    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;

    if let Some(v) = file_cfg.get("base_url") {
        settings.base_url = string_value("base_url", v)?;
    }
    if let Some(v) = file_cfg.get("request_timeout_secs") {
        settings.request_timeout_secs = match v {
            toml::Value::Integer(secs) if *secs >= 0 => *secs as u64,
            toml::Value::String(s) => parse_secs(s)?,
            other => bail!("request_timeout_secs must be a non-negative integer, got {other}"),
        };
    }
    if let Some(v) = file_cfg.get("default_name") {
        settings.default_name = string_value("default_name", v)?;
    }

    Ok(())
}

fn apply_env(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<()> {
    if let Some(v) = lookup("APP__BASE_URL") {
        settings.base_url = v;
    }
    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs =
            parse_secs(&v).context("APP__REQUEST_TIMEOUT_SECS is not a number of seconds")?;
    }
    if let Some(v) = lookup("APP__DEFAULT_NAME") {
        settings.default_name = v;
    }
    Ok(())
}

fn string_value(key: &str, value: &toml::Value) -> anyhow::Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        other => bail!("{key} must be a string, got {other}"),
    }
}

fn parse_secs(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid timeout '{raw}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
