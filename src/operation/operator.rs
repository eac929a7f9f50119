use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::expression::Renderer;
use crate::operation::fixed::FixedOperation;
use crate::value::Representable;

/// Computes the result of applying an operator to two values
pub type Evaluation<T> = Arc<dyn Fn(&T, &T) -> T + Send + Sync>;

/// Decides whether an operator may be applied to two values
pub type Legality<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// An immutable binary operator template.
///
/// Priority and the associativity/commutativity flags are properties of the
/// operator itself and drive parenthesization when rendering. `evaluate` is
/// only meaningful where `is_legal` holds.
#[derive(Clone)]
pub struct Operation<T> {
    symbol: String,
    priority: u8,
    is_associative: bool,
    is_commutative: bool,
    evaluate: Evaluation<T>,
    is_legal: Legality<T>,
}

impl<T: Representable> Operation<T> {
    /// Create a non-associative, non-commutative operator.
    ///
    /// Use [`Operation::associative`] and [`Operation::commutative`] to set the flags.
    pub fn new<E, L>(symbol: impl Into<String>, priority: u8, evaluate: E, is_legal: L) -> Self
    where
        E: Fn(&T, &T) -> T + Send + Sync + 'static,
        L: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            symbol: symbol.into(),
            priority,
            is_associative: false,
            is_commutative: false,
            evaluate: Arc::new(evaluate),
            is_legal: Arc::new(is_legal),
        }
    }

    pub fn associative(mut self) -> Self {
        self.is_associative = true;
        self
    }

    pub fn commutative(mut self) -> Self {
        self.is_commutative = true;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn is_associative(&self) -> bool {
        self.is_associative
    }

    pub fn is_commutative(&self) -> bool {
        self.is_commutative
    }

    pub fn is_legal(&self, left: &T, right: &T) -> bool {
        (self.is_legal)(left, right)
    }

    /// Apply the operator, or `None` when the application is illegal
    pub fn evaluate(&self, left: &T, right: &T) -> Option<T> {
        if self.is_legal(left, right) {
            Some((self.evaluate)(left, right))
        } else {
            None
        }
    }

    /// Freeze this operator on concrete operands.
    ///
    /// The operands are always recorded; the result is only present when the
    /// application is legal.
    pub fn freeze(&self, left: T, right: T) -> FixedOperation<T> {
        let result = self.evaluate(&left, &right);
        if result.is_none() {
            debug!(
                "Operation {} {} {} is not legal",
                left.as_text(),
                self.symbol,
                right.as_text()
            );
        }
        FixedOperation::from_parts(self.clone(), left, right, result)
    }

    /// Record an application with a claimed result, without evaluating it.
    ///
    /// Used for externally submitted solutions; the validator checks the
    /// claim against [`Operation::evaluate`].
    pub fn record(&self, left: T, right: T, claimed: T) -> FixedOperation<T> {
        FixedOperation::from_parts(self.clone(), left, right, Some(claimed))
    }

    /// Combine two already-rendered operands with this operator's symbol
    pub fn render<R: Renderer<T>>(
        &self,
        renderer: &R,
        left: R::Output,
        right: R::Output,
    ) -> R::Output {
        renderer.combine(left, &self.symbol, right)
    }
}

impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("symbol", &self.symbol)
            .field("priority", &self.priority)
            .field("is_associative", &self.is_associative)
            .field("is_commutative", &self.is_commutative)
            .finish_non_exhaustive()
    }
}
