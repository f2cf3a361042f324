mod primitive;
pub use primitive::Primitive;

pub use jorm_core::stmt::{Type, Value};
