//! Errors raised while handling `config.ron`.

/// Failure to load, store, or accept a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` exists but could not be read.
    #[error("could not read {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("could not write {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// RON encoding failed.
    #[error("could not encode config: {0}")]
    Serialize(#[from] ron::Error),

    /// A setting parsed but is outside its usable range.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
