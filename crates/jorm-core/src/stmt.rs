mod cell;
pub use cell::Cell;

mod select;
pub use select::{Predicate, Select};

mod ty;
pub use ty::Type;

mod value;
pub use value::{widen_f32, Value};
