use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

pub const SECTION: &str = "readout";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config")]
    Ini {
        #[from]
        source: ini::Error,
    },
    #[error("config has no [readout] section")]
    MissingSection,
    #[error("config names no models: set `dir` or `file` in [readout]")]
    NoInputs,
    #[error("`{key}` must be true or false, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

/// What to decode and how to report it, from the `[readout]` section.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReadoutConfig {
    /// Scanned for `*.md2`, not recursively.
    pub dir: Option<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Report UV bounds with `v = 1 - t`.
    pub flip_uvs: bool,
}

impl ReadoutConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let section = ini
            .section(Some(SECTION))
            .ok_or(ConfigError::MissingSection)?;

        let dir = section.get("dir").map(PathBuf::from);
        let files: Vec<PathBuf> = section.get_all("file").map(PathBuf::from).collect();
        if dir.is_none() && files.is_empty() {
            return Err(ConfigError::NoInputs);
        }

        let flip_uvs = match section.get("flip_uvs") {
            None => false,
            Some(value) => parse_bool("flip_uvs", value)?,
        };

        Ok(Self {
            dir,
            files,
            flip_uvs,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    fn parse(text: &str) -> Result<ReadoutConfig, ConfigError> {
        ReadoutConfig::from_ini(&Ini::load_from_str(text).unwrap())
    }

    #[test]
    fn reads_dir_and_files() {
        let config = parse(
            "[readout]\ndir = baseq2/models\nfile = tank.md2\nfile = gunner.md2\nflip_uvs = yes\n",
        )
        .unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("baseq2/models")));
        assert_eq!(
            config.files,
            vec![PathBuf::from("tank.md2"), PathBuf::from("gunner.md2")]
        );
        assert!(config.flip_uvs);
    }

    #[test]
    fn flip_defaults_off() {
        let config = parse("[readout]\nfile = tank.md2\n").unwrap();
        assert!(!config.flip_uvs);
        assert_eq!(config.dir, None);
    }

    #[test]
    fn missing_section() {
        assert!(matches!(
            parse("[launch]\ngame = q2\n"),
            Err(ConfigError::MissingSection)
        ));
    }

    #[test]
    fn needs_an_input() {
        assert!(matches!(
            parse("[readout]\nflip_uvs = true\n"),
            Err(ConfigError::NoInputs)
        ));
    }

    #[test]
    fn rejects_bad_bool() {
        let err = parse("[readout]\nfile = a.md2\nflip_uvs = maybe\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBool {
                key: "flip_uvs",
                ..
            }
        ));
    }
}
