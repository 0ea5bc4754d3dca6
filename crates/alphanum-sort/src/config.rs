use std::{
    fs, io,
    path::{Path, PathBuf},
};

use alphanum_cli::Args;
use alphanum_collate::Strength;
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sorter::SortOptions;

pub fn default_locale() -> String {
    "en".into()
}

pub fn default_parallel_threshold() -> usize {
    10_000
}

pub fn get_false() -> bool {
    false
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SortConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub strength: Strength,
    #[serde(default = "get_false")]
    pub reverse: bool,
    #[serde(default = "get_false")]
    pub unique: bool,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl SortConfig {
    pub const DEFAULT: &str = include_str!("../../../config/sort.toml");

    pub fn create_default_config(overwrite: bool) -> Result<PathBuf> {
        let path = Self::get_default_location()?;
        Self::create_config_at(&path, overwrite)?;
        Ok(path)
    }

    /// Writes the default config to `path`, or to the default location when
    /// no path is given, and returns where it went.
    pub fn init(path: Option<&Path>, overwrite: bool) -> Result<PathBuf> {
        match path {
            Some(path) => {
                Self::create_config_at(path, overwrite)?;
                Ok(path.to_path_buf())
            }
            None => Self::create_default_config(overwrite),
        }
    }

    pub fn create_config_at(path: &Path, overwrite: bool) -> Result<()> {
        if let Some(config_folder) = path.parent()
            && !config_folder.exists()
        {
            fs::create_dir_all(config_folder)?;
        }

        if !path.exists() || overwrite {
            fs::write(path, Self::DEFAULT)?;
        }

        Ok(())
    }

    /// Loads the config at `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config `{}`", path.display()))
    }

    /// Like [`SortConfig::load`] but a missing file gives the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::metadata(path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no config at `{}`, using defaults", path.display());
                Ok(Self::default())
            }
            _ => Self::load(path),
        }
    }

    pub fn load_from_default_location() -> Result<Self> {
        match Self::get_default_location() {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                tracing::warn!("{err}, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn get_default_location() -> Result<PathBuf> {
        let Some(directories) = directories::ProjectDirs::from("", "", "alphanum") else {
            return Err(anyhow::Error::msg("Unable to find project directory"));
        };
        Ok(directories.config_dir().join("sort.toml"))
    }

    /// Command line values win over the file.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(locale) = &args.locale {
            self.locale = locale.clone();
        }
        if let Some(strength) = args.strength {
            self.strength = strength;
        }
        if args.reverse {
            self.reverse = true;
        }
        if args.no_reverse {
            self.reverse = false;
        }
        if args.unique {
            self.unique = true;
        }
        if args.no_unique {
            self.unique = false;
        }
    }

    pub fn options(&self) -> SortOptions {
        SortOptions {
            reverse: self.reverse,
            unique: self.unique,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        toml::from_str(Self::DEFAULT).unwrap()
    }
}
