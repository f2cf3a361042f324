use super::Error;
use crate::stmt::Value;

/// Error when a result cell cannot be turned into a field value.
///
/// This occurs when:
/// - The driver hands back a representation that is neither an integer nor
///   a byte sequence (NULL, temporal values, ...)
/// - The bytes of a cell do not parse as the field's declared type
/// - A parsed number does not fit the field's declared type
/// - A result column does not correspond to any field
#[derive(Debug)]
pub(super) struct DecodeError {
    column: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for DecodeError {}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("decode error: ")?;
        if let Some(column) = &self.column {
            write!(f, "column `{column}`: ")?;
        }
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates a decode error for the given result column.
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeError {
            column: Some(column.into().into()),
            message: message.into().into(),
        }))
    }

    /// Creates a decode error for a value that does not match the Rust type
    /// it is loaded into.
    pub fn type_conversion(value: Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeError {
            column: None,
            message: format!("cannot convert {} to {}", value.infer_ty(), to_type).into(),
        }))
    }

    /// Creates a decode error for a result row whose width does not match
    /// the projection.
    pub fn row_width(expected: usize, actual: usize) -> Error {
        Error::from(super::ErrorKind::Decode(DecodeError {
            column: None,
            message: format!("row has {actual} cells, expected {expected}").into(),
        }))
    }

    /// Returns `true` if this error is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Decode(_))
    }
}
