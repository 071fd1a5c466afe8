use thiserror::Error;

/// Main error type for the DLMS enumeration catalog
///
/// Every enumeration type reports an unrecognized label through the same
/// variant, so a caller can tell a bad enum name apart from any other
/// failure with a single check on [`DlmsError::kind`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DlmsError {
    /// A textual label did not match any member. Carries the input verbatim.
    #[error("unknown enum: \"{0}\"")]
    UnknownEnum(String),
}

/// Discriminant of a [`DlmsError`], comparable without looking at the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    UnknownEnum,
}

impl DlmsError {
    /// Build an `UnknownEnum` error for the given input
    pub fn unknown_enum(input: impl Into<String>) -> Self {
        DlmsError::UnknownEnum(input.into())
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            DlmsError::UnknownEnum(_) => ErrorKind::UnknownEnum,
        }
    }

    /// Check if this error was raised for an unrecognized enum label
    pub fn is_unknown_enum(&self) -> bool {
        self.kind() == ErrorKind::UnknownEnum
    }
}

/// Result type alias for DLMS operations
pub type DlmsResult<T> = Result<T, DlmsError>;
