//! Settings file: `<config dir>/trent/config.toml`, every field optional.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// How letters are written into the reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// One ISO-8859-9 byte per letter (legacy output)
    #[default]
    Latin5,
    /// UTF-8
    Utf8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
    pub mono: Option<String>,
    pub dual: Option<String>,
    pub triple: Option<String>,
    pub encoding: Option<Encoding>,
    pub line_ending: Option<LineEnding>,
}

/// Resolved settings after config file and CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub mono: String,
    pub dual: String,
    pub triple: String,
    pub encoding: Encoding,
    pub line_ending: LineEnding,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_dir: PathBuf::from("."),
            mono: "mono.txt".to_string(),
            dual: "dual.txt".to_string(),
            triple: "triple.txt".to_string(),
            encoding: Encoding::default(),
            line_ending: LineEnding::default(),
        }
    }
}

impl Settings {
    pub fn from_config(cfg: Config) -> Self {
        let d = Settings::default();
        Settings {
            output_dir: cfg.output_dir.unwrap_or(d.output_dir),
            mono: cfg.mono.unwrap_or(d.mono),
            dual: cfg.dual.unwrap_or(d.dual),
            triple: cfg.triple.unwrap_or(d.triple),
            encoding: cfg.encoding.unwrap_or(d.encoding),
            line_ending: cfg.line_ending.unwrap_or(d.line_ending),
        }
    }

    /// Output paths in mono, dual, triple order.
    pub fn output_paths(&self) -> [PathBuf; 3] {
        [
            self.output_dir.join(&self.mono),
            self.output_dir.join(&self.dual),
            self.output_dir.join(&self.triple),
        ]
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|d| d.join("trent").join("config.toml"))
}

pub fn parse_config(s: &str, path: &Path) -> Result<Config> {
    toml::from_str(s).map_err(|source| Error::Config { path: path.to_path_buf(), source })
}

/// Loads an explicitly requested config file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path)
        .map_err(|source| Error::ConfigUnreadable { path: path.to_path_buf(), source })?;
    parse_config(&s, path)
}

/// Loads the config at the default location, if any. A broken file there
/// is reported and skipped.
pub fn load_default_config() -> Config {
    let Some(path) = default_config_path() else { return Config::default() };
    if !path.exists() { return Config::default() }
    match load_config_from(&path) {
        Ok(c) => {
            log::debug!("loaded config from {}", path.display());
            c
        }
        Err(e) => {
            log::warn!("ignoring config: {}", e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.encoding, Encoding::Latin5);
        assert_eq!(s.line_ending.as_str(), "\r\n");
        let paths = s.output_paths();
        assert!(paths[0].ends_with("mono.txt"));
        assert!(paths[1].ends_with("dual.txt"));
        assert!(paths[2].ends_with("triple.txt"));
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse_config("encoding = \"utf8\"\nmono = \"tek.txt\"\n", Path::new("c.toml")).unwrap();
        let s = Settings::from_config(cfg);
        assert_eq!(s.encoding, Encoding::Utf8);
        assert_eq!(s.mono, "tek.txt");
        assert_eq!(s.dual, "dual.txt");
        assert_eq!(s.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_bad_config_is_error() {
        let err = parse_config("line_ending = \"cr\"", Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigUnreadable { .. }));
    }
}
