pub mod db;
pub use db::Db;

pub mod driver;

mod engine;

mod model;
pub use model::Model;

pub mod stmt;

pub use jorm_core::{schema, Error, Result};

pub use jorm_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        model::field_out_of_range,
        stmt::{Primitive, Type, Value},
        Error, Model, Result,
    };
    pub use jorm_core::schema;
}
