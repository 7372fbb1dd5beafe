//! Error types for Slated

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SlatedError>;

#[derive(Error, Debug)]
pub enum SlatedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Submission rejected: {0}")]
    Submission(#[from] RejectReason),

    #[error("Authentication required: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SlatedError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SlatedError::Submission(_) => 3,
            SlatedError::InvalidInput(_) => 3,
            SlatedError::Auth(_) => 2,
            SlatedError::Config(_) => 1,
            SlatedError::Store(_) => 1,
            SlatedError::Registry(_) => 1,
        }
    }
}

/// A draft failed one of the submission preconditions
///
/// The variants mirror the fail-fast validation order of the submission
/// gateway: media first, then accounts, then post types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("Missing content: attach a video or image file before scheduling")]
    MissingMedia,

    #[error("No accounts selected: choose at least one account to post to")]
    NoAccounts,

    #[error("No post types selected: choose at least one post type")]
    NoPostTypes,

    #[error("A submission is already in progress")]
    InFlight,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store operation failed: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown platform tag '{0}' in channel registry")]
    UnknownTag(String),

    #[error("Registry query failed: {0}")]
    Query(#[from] sqlx::Error),
}
