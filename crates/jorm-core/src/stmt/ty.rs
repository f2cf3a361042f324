use std::fmt;

/// Semantic type of a record field.
///
/// The set is closed: adding a type is a schema change, not something a
/// record can opt into at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed 64-bit integer
    I64,

    /// Variable-length text
    String,

    /// 32-bit floating point
    F32,
}

impl Type {
    /// The Rust type a field of this type is declared with.
    pub const fn rust_name(self) -> &'static str {
        match self {
            Type::I64 => "i64",
            Type::String => "String",
            Type::F32 => "f32",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}
