mod calculation;
mod factory;
mod history;
pub mod operations;
mod value;

pub use calculation::{Calculation, Operands};
pub use factory::{create, Operator};
pub use history::{Entry, History};
pub use value::Number;
