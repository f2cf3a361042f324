use super::Type;

/// A field value, as read from or written into a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer
    I64(i64),

    /// Text value
    String(String),

    /// 32-bit floating point
    F32(f32),
}

impl Value {
    /// Returns `true` if the value is the zero value of its type.
    ///
    /// Floats are compared bit for bit: `-0.0` and `NaN` are not zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::I64(v) => *v == 0,
            Self::String(v) => v.is_empty(),
            Self::F32(v) => v.to_bits() == 0,
        }
    }

    pub fn infer_ty(&self) -> Type {
        match self {
            Self::I64(_) => Type::I64,
            Self::String(_) => Type::String,
            Self::F32(_) => Type::F32,
        }
    }
}

/// Widens an `f32` to the `f64` closest to its shortest decimal form.
///
/// Drivers bind floats as doubles. A plain `as f64` turns `56.99f32` into
/// `56.9900016784668`, which never equals a stored `56.99`; going through
/// the decimal form keeps equality predicates usable.
pub fn widen_f32(value: f32) -> f64 {
    value.to_string().parse().unwrap_or(value as f64)
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, "i64")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, "f32")),
        }
    }
}
