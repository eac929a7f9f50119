//! Expression trees built from solution steps, and their rendering

mod errors;
mod factor;
mod glyph;
mod latex;
mod render;
mod text;
mod transcript;
mod tree;

pub use errors::ExpressionError;
pub use factor::{Factor, StepRecord};
pub use glyph::{Glyph, GlyphRenderer, SymbolNode};
pub use latex::LatexRenderer;
pub use render::{Renderer, render};
pub use text::TextRenderer;
pub use transcript::{DisplaySink, RowSink, write_solution};
pub use tree::convert_steps_to_equation;

#[cfg(test)]
mod tests;
