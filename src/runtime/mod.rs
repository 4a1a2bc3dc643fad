//! Runtime for lispel: the value model, the global environment, the tree
//! reader, and the evaluator.

mod environment;
mod evaluator;
mod reader;
mod value;

pub use environment::Environment;
pub use evaluator::{eval, Evaluator};
pub use reader::read;
pub use value::Value;
