//! Error types for boot-wire

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed catalog entry '{entry}': expected exactly one alias=coordinate pair")]
    MalformedCatalogEntry { entry: String },

    #[error("catalog entry '{entry}' has an empty {part}")]
    EmptyCatalogField { entry: String, part: &'static str },

    #[error("manifest has no version to serialize")]
    MissingVersion,

    #[error("invalid escape sequence '{sequence}' in properties text")]
    InvalidEscape { sequence: String },
}
