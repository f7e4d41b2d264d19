use thiserror::Error;

/// Failure reported by a key-value storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },

    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("no task data stored under {key}")]
    Missing { key: String },

    #[error("stored task data under {key} is malformed")]
    Deserialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize task collection")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("not an image file: {media_type:?}")]
    InvalidFileType { media_type: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("config value {field} must not be empty")]
    EmptyValue { field: &'static str },
}
