use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open input '{path}': {source}")]
    InputUnavailable { path: String, #[source] source: io::Error },

    #[error("could not open output file '{}': {source}", .path.display())]
    OutputUnavailable { path: PathBuf, #[source] source: io::Error },

    #[error("failed reading input: {0}")]
    Read(#[source] io::Error),

    #[error("failed writing report: {0}")]
    Write(#[from] io::Error),

    #[error("could not read config '{}': {source}", .path.display())]
    ConfigUnreadable { path: PathBuf, #[source] source: io::Error },

    #[error("invalid config '{}': {source}", .path.display())]
    Config { path: PathBuf, #[source] source: toml::de::Error },
}
