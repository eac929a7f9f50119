use std::sync::Arc;

use log::debug;

use crate::expression::errors::ExpressionError;
use crate::operation::{FixedOperation, Operation};
use crate::value::Representable;

/// One operand of a step: either a plain value or an earlier step's result
#[derive(Debug, Clone)]
pub enum Factor<T> {
    Literal(T),
    SubExpression(Arc<StepRecord<T>>),
}

impl<T: Representable> Factor<T> {
    /// The value this operand contributes
    pub fn value(&self) -> &T {
        match self {
            Factor::Literal(value) => value,
            Factor::SubExpression(step) => step.result(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Factor::Literal(_))
    }

    pub fn sub_expression(&self) -> Option<&StepRecord<T>> {
        match self {
            Factor::Literal(_) => None,
            Factor::SubExpression(step) => Some(step.as_ref()),
        }
    }

    fn reevaluate(&self) -> Option<T> {
        match self {
            Factor::Literal(value) => Some(value.clone()),
            Factor::SubExpression(step) => step.evaluate(),
        }
    }

    fn collect_literals(&self, out: &mut Vec<T>) {
        match self {
            Factor::Literal(value) => out.push(value.clone()),
            Factor::SubExpression(step) => {
                step.left.collect_literals(out);
                step.right.collect_literals(out);
            }
        }
    }
}

impl<T> From<StepRecord<T>> for Factor<T> {
    fn from(step: StepRecord<T>) -> Self {
        Factor::SubExpression(Arc::new(step))
    }
}

/// A frozen operation together with its resolved operands
#[derive(Debug, Clone)]
pub struct StepRecord<T> {
    operation: FixedOperation<T>,
    result: T,
    left: Factor<T>,
    right: Factor<T>,
}

impl<T: Representable> StepRecord<T> {
    /// # Errors
    ///
    /// Returns an error when the frozen operation carries no result, i.e. it
    /// was not legal on its operands, or when an operand's value differs from
    /// the operand recorded in the operation.
    pub fn new(
        operation: FixedOperation<T>,
        left: Factor<T>,
        right: Factor<T>,
    ) -> Result<Self, ExpressionError> {
        let Some(result) = operation.result().cloned() else {
            debug!(
                "Rejecting step without result: {} {} {}",
                operation.left().as_text(),
                operation.operation().symbol(),
                operation.right().as_text()
            );
            return Err(ExpressionError::UnresolvedOperation {
                left: operation.left().as_text(),
                symbol: operation.operation().symbol().to_string(),
                right: operation.right().as_text(),
            });
        };

        for (recorded, operand) in [(operation.left(), &left), (operation.right(), &right)] {
            if !operand.value().is_equivalent_to(recorded) {
                debug!(
                    "Rejecting step: operand {} differs from recorded {}",
                    operand.value().as_text(),
                    recorded.as_text()
                );
                return Err(ExpressionError::OperandMismatch {
                    recorded: recorded.as_text(),
                    operand: operand.value().as_text(),
                });
            }
        }

        Ok(Self {
            operation,
            result,
            left,
            right,
        })
    }

    /// Freeze `operation` on the values of two operands and record the step
    ///
    /// # Errors
    ///
    /// Returns an error when the operation is not legal on the operand values.
    pub fn apply(
        operation: &Operation<T>,
        left: Factor<T>,
        right: Factor<T>,
    ) -> Result<Self, ExpressionError> {
        let fixed = operation.freeze(left.value().clone(), right.value().clone());
        Self::new(fixed, left, right)
    }

    /// Apply `operation` to two plain values
    ///
    /// # Errors
    ///
    /// Returns an error when the operation is not legal on the values.
    pub fn literal(operation: &Operation<T>, left: T, right: T) -> Result<Self, ExpressionError> {
        Self::apply(operation, Factor::Literal(left), Factor::Literal(right))
    }

    pub fn fixed(&self) -> &FixedOperation<T> {
        &self.operation
    }

    pub fn operation(&self) -> &Operation<T> {
        self.operation.operation()
    }

    pub fn left(&self) -> &Factor<T> {
        &self.left
    }

    pub fn right(&self) -> &Factor<T> {
        &self.right
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    /// Re-apply every embedded operator bottom-up
    pub fn evaluate(&self) -> Option<T> {
        let left = self.left.reevaluate()?;
        let right = self.right.reevaluate()?;
        self.operation().evaluate(&left, &right)
    }

    /// Leaf values of the tree, left to right
    pub fn literals(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.left.collect_literals(&mut out);
        self.right.collect_literals(&mut out);
        out
    }
}
