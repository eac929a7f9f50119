use crate::expression::render::Renderer;
use crate::value::Representable;

const OPEN: &str = "\\left(";
const CLOSE: &str = "\\right)";

/// LaTeX rendering.
/// - Uses \cdot for multiplication
/// - Uses \div for division
/// - Parentheses are sized with \left( and \right)
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl LatexRenderer {
    pub fn new() -> Self {
        Self
    }

    fn symbol(symbol: &str) -> &str {
        match symbol {
            "*" | "×" => "\\cdot",
            "/" | "÷" => "\\div",
            other => other,
        }
    }
}

impl<T: Representable> Renderer<T> for LatexRenderer {
    type Output = String;

    fn literal(&self, value: &T) -> String {
        value.as_text()
    }

    fn parenthesize(&self, inner: String) -> String {
        format!("{}{}{}", OPEN, inner, CLOSE)
    }

    fn is_parenthesized(&self, repr: &String) -> bool {
        let Some(body) = repr
            .strip_prefix(OPEN)
            .and_then(|rest| rest.strip_suffix(CLOSE))
        else {
            return false;
        };

        // The opening group must close at the very end
        let mut depth = 1usize;
        let mut rest = body;
        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix(OPEN) {
                depth += 1;
                rest = after;
            } else if let Some(after) = rest.strip_prefix(CLOSE) {
                depth -= 1;
                if depth == 0 {
                    return false;
                }
                rest = after;
            } else {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
        true
    }

    fn combine(&self, left: String, symbol: &str, right: String) -> String {
        format!("{} {} {}", left, Self::symbol(symbol), right)
    }

    fn equate(&self, expression: String, value: String) -> String {
        format!("{} = {}", expression, value)
    }

    fn error(&self) -> String {
        String::from("\\mathrm{ERROR}")
    }
}
