use crate::expression::render::Renderer;
use crate::value::Representable;

/// A single drawable element of a rendered expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    Value(String),
    Symbol(String),
    OpenParen,
    CloseParen,
    Equals,
    Error,
}

/// Tree of glyphs: either one glyph, or a left/middle/right triple.
///
/// A parenthesized group is a triple whose outer parts are paren leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolNode {
    Leaf(Glyph),
    Branch(Box<SymbolNode>, Box<SymbolNode>, Box<SymbolNode>),
}

impl SymbolNode {
    fn branch(left: SymbolNode, middle: SymbolNode, right: SymbolNode) -> Self {
        SymbolNode::Branch(Box::new(left), Box::new(middle), Box::new(right))
    }

    /// Glyphs in drawing order, left to right
    pub fn glyphs(&self) -> Vec<&Glyph> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Glyph>) {
        match self {
            SymbolNode::Leaf(glyph) => out.push(glyph),
            SymbolNode::Branch(l, m, r) => {
                l.collect(out);
                m.collect(out);
                r.collect(out);
            }
        }
    }

    /// Number of glyphs a rasterizer has to lay out horizontally
    pub fn width(&self) -> usize {
        match self {
            SymbolNode::Leaf(_) => 1,
            SymbolNode::Branch(l, m, r) => l.width() + m.width() + r.width(),
        }
    }
}

/// Renders expressions into [`SymbolNode`] trees for a graphical surface
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphRenderer;

impl GlyphRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Representable> Renderer<T> for GlyphRenderer {
    type Output = SymbolNode;

    fn literal(&self, value: &T) -> SymbolNode {
        SymbolNode::Leaf(Glyph::Value(value.as_text()))
    }

    fn parenthesize(&self, inner: SymbolNode) -> SymbolNode {
        SymbolNode::branch(
            SymbolNode::Leaf(Glyph::OpenParen),
            inner,
            SymbolNode::Leaf(Glyph::CloseParen),
        )
    }

    fn is_parenthesized(&self, repr: &SymbolNode) -> bool {
        matches!(
            repr,
            SymbolNode::Branch(l, _, r)
                if **l == SymbolNode::Leaf(Glyph::OpenParen)
                    && **r == SymbolNode::Leaf(Glyph::CloseParen)
        )
    }

    fn combine(&self, left: SymbolNode, symbol: &str, right: SymbolNode) -> SymbolNode {
        SymbolNode::branch(left, SymbolNode::Leaf(Glyph::Symbol(symbol.to_string())), right)
    }

    fn equate(&self, expression: SymbolNode, value: SymbolNode) -> SymbolNode {
        SymbolNode::branch(expression, SymbolNode::Leaf(Glyph::Equals), value)
    }

    fn error(&self) -> SymbolNode {
        SymbolNode::Leaf(Glyph::Error)
    }
}

impl std::fmt::Display for SymbolNode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let parts: Vec<String> = self
            .glyphs()
            .into_iter()
            .map(|glyph| match glyph {
                Glyph::Value(text) | Glyph::Symbol(text) => format!("[{}]", text),
                Glyph::OpenParen => String::from("[(]"),
                Glyph::CloseParen => String::from("[)]"),
                Glyph::Equals => String::from("[=]"),
                Glyph::Error => String::from("[ERROR]"),
            })
            .collect();
        write!(f, "{}", parts.concat())
    }
}
