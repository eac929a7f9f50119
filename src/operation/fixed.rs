use crate::expression::Renderer;
use crate::operation::operator::Operation;
use crate::value::Representable;

/// An operator applied to concrete operands.
///
/// Built by [`Operation::freeze`] or [`Operation::record`]; never mutated.
#[derive(Debug, Clone)]
pub struct FixedOperation<T> {
    operation: Operation<T>,
    left: T,
    right: T,
    result: Option<T>,
}

impl<T: Representable> FixedOperation<T> {
    pub(crate) fn from_parts(
        operation: Operation<T>,
        left: T,
        right: T,
        result: Option<T>,
    ) -> Self {
        Self {
            operation,
            left,
            right,
            result,
        }
    }

    pub fn operation(&self) -> &Operation<T> {
        &self.operation
    }

    pub fn left(&self) -> &T {
        &self.left
    }

    pub fn right(&self) -> &T {
        &self.right
    }

    /// The recorded result, absent when the application was illegal
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Whether the recorded result matches a fresh evaluation of the operands
    pub fn is_consistent(&self) -> bool {
        match (&self.result, self.operation.evaluate(&self.left, &self.right)) {
            (Some(recorded), Some(actual)) => recorded.is_equivalent_to(&actual),
            _ => false,
        }
    }

    /// Render `left op right` without a result
    pub fn to_expression<R: Renderer<T>>(&self, renderer: &R) -> R::Output {
        self.operation.render(
            renderer,
            renderer.literal(&self.left),
            renderer.literal(&self.right),
        )
    }

    /// Render `left op right = result`, or `None` for an unresolved application
    pub fn to_equation<R: Renderer<T>>(&self, renderer: &R) -> Option<R::Output> {
        let result = self.result.as_ref()?;
        Some(renderer.equate(self.to_expression(renderer), renderer.literal(result)))
    }
}
