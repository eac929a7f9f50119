use crate::expression::render::Renderer;
use crate::value::Representable;

/// Plain-text rendering, e.g. `4 * (5 + 3 - 2)`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Whether the whole string is one parenthesized group.
///
/// `(1 + 2) * (3 + 4)` starts and ends with parentheses but is not a group.
fn is_single_group(repr: &str) -> bool {
    if !(repr.starts_with('(') && repr.ends_with(')')) {
        return false;
    }

    let mut depth = 0usize;
    for (i, c) in repr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + c.len_utf8() == repr.len();
                }
            }
            _ => {}
        }
    }
    false
}

impl<T: Representable> Renderer<T> for TextRenderer {
    type Output = String;

    fn literal(&self, value: &T) -> String {
        value.as_text()
    }

    fn parenthesize(&self, inner: String) -> String {
        format!("({})", inner)
    }

    fn is_parenthesized(&self, repr: &String) -> bool {
        is_single_group(repr)
    }

    fn combine(&self, left: String, symbol: &str, right: String) -> String {
        format!("{} {} {}", left, symbol, right)
    }

    fn equate(&self, expression: String, value: String) -> String {
        format!("{} = {}", expression, value)
    }

    fn error(&self) -> String {
        String::from("ERROR")
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::is_single_group;

    #[test]
    fn test_is_single_group() {
        assert!(is_single_group("(1 + 2)"));
        assert!(is_single_group("((1 + 2) * 3)"));
        assert!(!is_single_group("(1 + 2) * (3 + 4)"));
        assert!(!is_single_group("1 + 2"));
        assert!(!is_single_group("(1 + 2) * 3"));
        assert!(!is_single_group(""));
    }
}
