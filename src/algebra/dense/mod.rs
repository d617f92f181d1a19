mod core;
mod display;
pub use self::display::*;
mod matrix_math;
pub use self::matrix_math::*;
mod row_ops;
mod types;
pub use self::types::*;
