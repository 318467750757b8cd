use std::env;

use crate::errors::MessageError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of a JSON array of links; stdin is read when unset.
    pub links_file: Option<String>,
    pub pretty: bool,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns [`MessageError::ConfigError`] if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, MessageError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::ConfigError`] if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MessageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let links_file = lookup("FEEDCARD_LINKS_FILE").filter(|path| !path.trim().is_empty());
        let pretty = match lookup("FEEDCARD_PRETTY") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| MessageError::ConfigError(format!("FEEDCARD_PRETTY: {raw}")))?,
            None => false,
        };

        Ok(Self { links_file, pretty })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
