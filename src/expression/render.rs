use crate::expression::factor::{Factor, StepRecord};
use crate::value::Representable;

/// Output capabilities an expression representation must provide.
///
/// [`render`] walks the tree once and only calls into these hooks, so text,
/// LaTeX and glyph output share the same parenthesization rules.
pub trait Renderer<T> {
    type Output;

    fn literal(&self, value: &T) -> Self::Output;
    fn parenthesize(&self, inner: Self::Output) -> Self::Output;
    fn is_parenthesized(&self, repr: &Self::Output) -> bool;
    fn combine(&self, left: Self::Output, symbol: &str, right: Self::Output) -> Self::Output;

    /// `expression = value`
    fn equate(&self, expression: Self::Output, value: Self::Output) -> Self::Output;

    /// Shown in place of a goal when no goal could be generated
    fn error(&self) -> Self::Output;
}

/// Render a step tree with minimal parentheses.
///
/// A sub-expression is wrapped when its operator binds looser than the
/// parent, or when it sits on the right of a non-associative parent of equal
/// priority. Under a commutative parent a wrapped left side is moved to the
/// right of a bare right side.
pub fn render<T, R>(renderer: &R, step: &StepRecord<T>) -> R::Output
where
    T: Representable,
    R: Renderer<T>,
{
    let operation = step.operation();
    let priority = operation.priority();

    let mut left = match step.left() {
        Factor::Literal(value) => renderer.literal(value),
        Factor::SubExpression(inner) => {
            let repr = render(renderer, inner);
            if inner.operation().priority() < priority {
                renderer.parenthesize(repr)
            } else {
                repr
            }
        }
    };

    let mut right = match step.right() {
        Factor::Literal(value) => renderer.literal(value),
        Factor::SubExpression(inner) => {
            let repr = render(renderer, inner);
            let inner_priority = inner.operation().priority();
            if inner_priority < priority
                || (inner_priority == priority && !operation.is_associative())
            {
                renderer.parenthesize(repr)
            } else {
                repr
            }
        }
    };

    if operation.is_commutative()
        && renderer.is_parenthesized(&left)
        && !renderer.is_parenthesized(&right)
    {
        std::mem::swap(&mut left, &mut right);
    }

    operation.render(renderer, left, right)
}
