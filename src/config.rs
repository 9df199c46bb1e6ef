//! User configuration.

use std::env;
use std::path::PathBuf;

use log::*;
use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use tokio::fs;
use tokio::io;

use crate::canvas::BORDER_MARKER;

/// Configuration supplied by the user.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// The character used by fills that don't specify one.
    #[serde(default = "default_filler")]
    #[serde(deserialize_with = "validate_filler")]
    pub filler: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            filler: default_filler(),
        }
    }
}

fn default_filler() -> char {
    'o'
}

fn validate_filler<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: Deserializer<'de>,
{
    let filler = char::deserialize(deserializer)?;
    if filler == BORDER_MARKER || filler.is_control() {
        return Err(de::Error::invalid_value(
            Unexpected::Char(filler),
            &"a printable character other than the border marker",
        ));
    }

    Ok(filler)
}

impl Config {
    /// Read the configuration from a file path. If no path is supplied, the default configuration
    /// is returned.
    pub async fn read(path: Option<PathBuf>) -> anyhow::Result<Config> {
        // If the file doesn't exist, return the default config.
        let path = match path {
            Some(path) => path,
            None => {
                info!("could not determine config directory");
                return Ok(Config::default());
            }
        };

        info!("reading config from {}", path.display());

        let config = match fs::read(path).await {
            Ok(bytes) => toml::from_slice(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("config file not found");
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(config)
    }

    /// Returns the path of the config file.
    ///
    /// Respects `XDG_CONFIG_HOME`.
    pub fn config_path() -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;

        Some(config_dir.join("canvas/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::ops::Deref;

    use tempfile::NamedTempFile;
    use tokio::fs::File;
    use tokio::io::AsyncWriteExt;

    use super::Config;

    #[test]
    fn deserialize_empty_config() -> Result<(), Box<dyn Error>> {
        let config = toml::from_str::<Config>("")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.filler, 'o');
        Ok(())
    }

    #[test]
    fn deserialize_filler() -> Result<(), Box<dyn Error>> {
        let config = toml::from_str::<Config>("filler = '#'")?;
        assert_eq!(config, Config { filler: '#' });
        Ok(())
    }

    #[test]
    fn deserialize_border_marker_filler() {
        let err = toml::from_str::<Config>("filler = 'x'").unwrap_err();

        assert!(err
            .to_string()
            .contains("expected a printable character other than the border marker"));
    }

    #[test]
    fn deserialize_long_filler() {
        assert!(toml::from_str::<Config>("filler = 'oo'").is_err());
    }

    #[tokio::test]
    async fn read_no_config_dir() {
        assert_eq!(Config::read(None).await.unwrap(), Config::default());
    }

    #[tokio::test]
    async fn read_nonexistent_file() {
        let config = Config::read(Some("i-dont-exist.toml".into()))
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn read_file() {
        let (file, path) = NamedTempFile::new().unwrap().into_parts();
        let mut file = File::from_std(file);
        file.write_all(b"filler = '*'\n").await.unwrap();
        file.flush().await.unwrap();

        let config = Config::read(Some(path.deref().into())).await.unwrap();
        assert_eq!(config.filler, '*');
    }

    #[tokio::test]
    async fn read_non_toml_file() {
        let (file, path) = NamedTempFile::new().unwrap().into_parts();
        let mut file = File::from_std(file);
        file.write_all(b"I am not TOML").await.unwrap();
        file.flush().await.unwrap();
        assert!(Config::read(Some(path.deref().into())).await.is_err());
        drop(path);
    }
}
