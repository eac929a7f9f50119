use std::sync::Arc;

use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::factor::{Factor, StepRecord};
use crate::value::Representable;

/// Reassemble an ordered list of steps into a single expression tree.
///
/// Operands are matched to earlier steps by value: the left operand binds
/// the earliest unconsumed step producing it, the right operand the latest.
/// A step never binds the same earlier step to both sides; when that would
/// happen the right operand stays a literal.
///
/// # Errors
///
/// Returns an error if `steps` is empty or the steps do not join into one tree.
pub fn convert_steps_to_equation<T: Representable>(
    steps: &[StepRecord<T>],
) -> Result<StepRecord<T>, ExpressionError> {
    let mut sub_steps: Vec<Arc<StepRecord<T>>> = Vec::with_capacity(steps.len());

    for step in steps {
        let fixed = step.fixed();
        let left_index = sub_steps
            .iter()
            .position(|s| s.result().is_equivalent_to(fixed.left()));
        let mut right_index = sub_steps
            .iter()
            .rposition(|s| s.result().is_equivalent_to(fixed.right()));

        if right_index == left_index {
            right_index = None;
        }

        let left = match left_index.and_then(|i| sub_steps.get(i)) {
            Some(sub) => Factor::SubExpression(Arc::clone(sub)),
            None => Factor::Literal(fixed.left().clone()),
        };
        let right = match right_index.and_then(|i| sub_steps.get(i)) {
            Some(sub) => Factor::SubExpression(Arc::clone(sub)),
            None => Factor::Literal(fixed.right().clone()),
        };

        let combined = StepRecord::new(fixed.clone(), left, right)?;
        debug!(
            "Step {} {} {} binds left={:?} right={:?}",
            fixed.left().as_text(),
            fixed.operation().symbol(),
            fixed.right().as_text(),
            left_index,
            right_index
        );

        // Higher index first so the second removal is not shifted
        let mut consumed: Vec<usize> = left_index.into_iter().chain(right_index).collect();
        consumed.sort_unstable_by(|a, b| b.cmp(a));
        for index in consumed {
            sub_steps.remove(index);
        }
        sub_steps.push(Arc::new(combined));
    }

    match sub_steps.len() {
        0 => Err(ExpressionError::EmptySteps),
        1 => {
            let root = sub_steps.remove(0);
            Ok(Arc::unwrap_or_clone(root))
        }
        parts => Err(ExpressionError::DisconnectedSteps(parts)),
    }
}
