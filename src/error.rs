/// Error types for deck assembly and packaging.
use thiserror::Error;

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error types for deck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// OPC package error
    #[error("OPC error: {0}")]
    Opc(#[from] crate::opc::error::OpcError),

    /// XML formatting or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Color value that is not a six-digit hex triple
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Outline document that cannot be rendered
    #[error("Invalid outline: {0}")]
    InvalidOutline(String),

    /// Deck name that is not registered
    #[error("Unknown deck: {0}")]
    UnknownDeck(String),

    /// Part missing from a package being inspected
    #[error("Part not found: {0}")]
    MissingPart(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for DeckError {
    fn from(err: std::fmt::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<quick_xml::Error> for DeckError {
    fn from(err: quick_xml::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DeckError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::Opc(crate::opc::error::OpcError::ZipError(err))
    }
}
