use thiserror::Error;

/// All errors that can occur in larder-core.
#[derive(Debug, Error)]
pub enum LarderError {
    #[error("Option not found: {0}")]
    OptionNotFound(String),

    #[error("Unknown consumable type: {0}")]
    InvalidConsumableType(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Duplicate consumable id: {0}")]
    DuplicateConsumable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Non-zero exit codes the `larder` binary ends with on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The catalog file does not exist.
    NotFound = 2,
    /// The picker closed with nothing picked.
    Cancelled = 4,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        self as i32
    }
}

pub type Result<T> = std::result::Result<T, LarderError>;
