//! Binary operators and their frozen applications

mod arithmetic;
mod fixed;
mod operator;

pub use arithmetic::{add, arithmetic_operators, divide, multiply, subtract};
pub use fixed::FixedOperation;
pub use operator::{Evaluation, Legality, Operation};
