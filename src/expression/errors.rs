use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Operation {left} {symbol} {right} has no result")]
    UnresolvedOperation {
        left: String,
        symbol: String,
        right: String,
    },
    #[error("Operand {operand} does not match the recorded operand {recorded}")]
    OperandMismatch { recorded: String, operand: String },
    #[error("Cannot build an expression from an empty step list")]
    EmptySteps,
    #[error("Steps do not combine into a single expression ({0} disconnected parts)")]
    DisconnectedSteps(usize),
}
