//! Error types for ferro-lvg
//!
//! Only [`LvgError::MalformedInput`] aborts construction of a
//! [`VariantLvg`](crate::lvg::VariantLvg). Every other condition degrades to a
//! smaller result set or fails just the call that raised it. Translation
//! failures reported by the mapping collaborators use the separate
//! [`MappingError`](crate::mapping::MappingError) type and never escape the engine.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Parse errors (E1xxx)
    /// Text could not be parsed as an HGVS variant
    InvalidVariant = 1001,
    /// Primary input of an LVG could not be parsed
    MalformedInput = 1002,

    // Decomposition errors (E2xxx)
    /// Variant lacks the fields needed for decomposition
    RejectedVariant = 2001,
    /// No slang rule for this edit type
    UnsupportedEditType = 2002,

    // Record / configuration errors (E3xxx)
    /// Exchange record is missing required fields
    MalformedRecord = 3001,
    /// Configuration could not be loaded
    InvalidConfig = 3002,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON parsing error
    JsonError = 9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidVariant => "invalid HGVS variant",
            ErrorCode::MalformedInput => "unparseable LVG input",
            ErrorCode::RejectedVariant => "variant unusable for decomposition",
            ErrorCode::UnsupportedEditType => "unsupported edit type",
            ErrorCode::MalformedRecord => "malformed exchange record",
            ErrorCode::InvalidConfig => "invalid configuration",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON parsing error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-lvg operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LvgError {
    /// Parse error with position and message
    #[error("Parse error at position {pos}: {msg}")]
    Parse { pos: usize, msg: String },

    /// The primary input of an LVG could not be turned into a sequence variant
    #[error("Cannot create sequence variant from input '{input}': {msg}")]
    MalformedInput { input: String, msg: String },

    /// Variant parses but cannot be decomposed into components
    #[error("Rejected variant: {msg}")]
    RejectedVariant { msg: String },

    /// Slang generation requested for an edit type with no rule
    #[error("Cannot currently handle edit type {edit_type}")]
    UnsupportedEditType { edit_type: String },

    /// Exchange record is malformed
    #[error("Malformed exchange record: {msg}")]
    MalformedRecord { msg: String },

    /// Configuration error
    #[error("Config error: {msg}")]
    Config { msg: String },

    /// IO error (for file operations)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON parsing error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl LvgError {
    /// Create a parse error
    pub fn parse(pos: usize, msg: impl Into<String>) -> Self {
        LvgError::Parse {
            pos,
            msg: msg.into(),
        }
    }

    /// Create a rejected-variant error
    pub fn rejected(msg: impl Into<String>) -> Self {
        LvgError::RejectedVariant { msg: msg.into() }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            LvgError::Parse { .. } => ErrorCode::InvalidVariant,
            LvgError::MalformedInput { .. } => ErrorCode::MalformedInput,
            LvgError::RejectedVariant { .. } => ErrorCode::RejectedVariant,
            LvgError::UnsupportedEditType { .. } => ErrorCode::UnsupportedEditType,
            LvgError::MalformedRecord { .. } => ErrorCode::MalformedRecord,
            LvgError::Config { .. } => ErrorCode::InvalidConfig,
            LvgError::Io { .. } => ErrorCode::IoError,
            LvgError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// True for the unusable-variant condition that the closure engine keeps
    /// despite a configured length limit.
    pub fn is_rejected(&self) -> bool {
        matches!(self, LvgError::RejectedVariant { .. })
    }

    /// Format the error prefixed with its code, e.g. `[E2001] Rejected variant: ...`
    pub fn detailed_message(&self) -> String {
        format!("[{}] {}", self.code(), self)
    }
}

impl From<std::io::Error> for LvgError {
    fn from(err: std::io::Error) -> Self {
        LvgError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LvgError {
    fn from(err: serde_json::Error) -> Self {
        LvgError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LvgError {
    fn from(err: toml::de::Error) -> Self {
        LvgError::Config {
            msg: err.to_string(),
        }
    }
}
