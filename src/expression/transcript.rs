use crate::expression::errors::ExpressionError;
use crate::expression::factor::StepRecord;
use crate::expression::render::{Renderer, render};
use crate::expression::tree::convert_steps_to_equation;
use crate::value::Representable;

/// A surface that accumulates rendered representations line by line
pub trait DisplaySink<Repr> {
    fn append(&mut self, repr: Repr);
    fn line_break(&mut self);
}

impl DisplaySink<String> for String {
    fn append(&mut self, repr: String) {
        self.push_str(&repr);
    }

    fn line_break(&mut self) {
        self.push('\n');
    }
}

/// Rows of representations, for surfaces that lay out each row themselves
#[derive(Debug, Clone, PartialEq)]
pub struct RowSink<Repr> {
    rows: Vec<Vec<Repr>>,
}

impl<Repr> RowSink<Repr> {
    pub fn new() -> Self {
        Self {
            rows: vec![Vec::new()],
        }
    }

    pub fn rows(&self) -> &[Vec<Repr>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Repr>> {
        self.rows
    }
}

impl<Repr> Default for RowSink<Repr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Repr> DisplaySink<Repr> for RowSink<Repr> {
    fn append(&mut self, repr: Repr) {
        match self.rows.last_mut() {
            Some(row) => row.push(repr),
            None => self.rows.push(vec![repr]),
        }
    }

    fn line_break(&mut self) {
        self.rows.push(Vec::new());
    }
}

/// Write a full solution: one equation per step, a blank line, then the
/// reconstructed expression equal to the final result.
///
/// Nothing is written when the steps cannot be reconstructed.
///
/// # Errors
///
/// Returns an error if `steps` is empty or does not form a single expression.
pub fn write_solution<T, R, S>(
    renderer: &R,
    sink: &mut S,
    steps: &[StepRecord<T>],
) -> Result<(), ExpressionError>
where
    T: Representable,
    R: Renderer<T>,
    S: DisplaySink<R::Output>,
{
    let root = convert_steps_to_equation(steps)?;

    for step in steps {
        if let Some(equation) = step.fixed().to_equation(renderer) {
            sink.append(equation);
        }
        sink.line_break();
    }
    sink.line_break();

    let whole = render(renderer, &root);
    sink.append(renderer.equate(whole, renderer.literal(root.result())));
    Ok(())
}
