use std::fmt;

/// One result cell, in the representation the driver transported it in.
///
/// Drivers classify their native values into one of these two forms when a
/// row is scanned; anything else is rejected at that point.
#[derive(Clone, PartialEq, Eq)]
pub enum Cell {
    /// A 64-bit signed integer
    I64(i64),

    /// A byte sequence: text, blobs and decimal renderings of numbers
    Bytes(Vec<u8>),
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::I64(value)
    }
}

impl From<Vec<u8>> for Cell {
    fn from(value: Vec<u8>) -> Self {
        Cell::Bytes(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Bytes(value.as_bytes().to_vec())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Cell::Bytes(v) => f
                .debug_tuple("Bytes")
                .field(&String::from_utf8_lossy(v))
                .finish(),
        }
    }
}
