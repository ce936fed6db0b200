use serde::Deserialize;
use std::{fs, io, path::Path};

use crate::error::Error;

/// Name of the credentials file, resolved against the working directory.
pub const SECRETS_FILE: &str = "secrets.toml";

/// Credentials loaded once per run and never written back.
///
/// Example TOML:
/// ```toml
/// [openweather]
/// api_key = "<YOUR-OPENWEATHER-API-KEY>"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Secrets {
    pub openweather: OpenWeatherSecrets,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherSecrets {
    pub api_key: String,
}

impl Secrets {
    /// Load credentials from [`SECRETS_FILE`] in the working directory.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new(SECRETS_FILE))
    }

    /// Load credentials from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => Error::ConfigMissing { path: path.to_path_buf() },
            _ => Error::ConfigRead { path: path.to_path_buf(), source },
        })?;

        Self::parse(&contents).ok_or_else(|| Error::ConfigInvalid { path: path.to_path_buf() })
    }

    fn parse(contents: &str) -> Option<Self> {
        toml::from_str(contents).ok()
    }

    /// The OpenWeather API key.
    pub fn api_key(&self) -> &str {
        &self.openweather.api_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_key_from_openweather_section() {
        let secrets =
            Secrets::parse("[openweather]\napi_key = \"SECRET\"\n").expect("valid secrets");

        assert_eq!(secrets.api_key(), "SECRET");
    }

    #[test]
    fn rejects_key_outside_the_openweather_section() {
        assert!(Secrets::parse("api_key = \"SECRET\"\n").is_none());
    }

    #[test]
    fn rejects_section_without_api_key() {
        assert!(Secrets::parse("[openweather]\nregion = \"eu\"\n").is_none());
    }

    #[test]
    fn rejects_non_toml_content() {
        assert!(Secrets::parse("openweather: {api_key: SECRET}").is_none());
    }

    #[test]
    fn missing_file_is_a_clear_error() {
        let err = Secrets::load_from(Path::new("no-such-dir/secrets.toml")).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Missing configuration file"));
        assert!(msg.contains("no-such-dir/secrets.toml"));
    }
}
