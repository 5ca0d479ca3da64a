//! Expression evaluator
//!
//! Walks a parsed tree and folds it into a single `f64`.

use super::ast::{BinOp, Expr};
use super::error::ExprError;

/// Expression evaluator
///
/// Division follows IEEE-754: `1/0` is `inf`, `0/0` is `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an expression
    pub fn eval(&self, expr: &Expr) -> Result<f64, ExprError> {
        match expr {
            Expr::Numeral(text) => self.numeral_to_value(text),
            Expr::Binary { left, op, right } => {
                let l = self.eval(left)?;
                let r = self.eval(right)?;
                Ok(self.apply_binop(l, *op, r))
            }
        }
    }

    fn numeral_to_value(&self, text: &str) -> Result<f64, ExprError> {
        text.parse::<f64>()
            .map_err(|_| ExprError::malformed(text))
    }

    fn apply_binop(&self, left: f64, op: BinOp, right: f64) -> f64 {
        match op {
            BinOp::Add => left + right,
            BinOp::Sub => left - right,
            BinOp::Mul => left * right,
            BinOp::Div => left / right,
        }
    }
}

/// Evaluate a tree with a default evaluator
pub fn evaluate(expr: &Expr) -> Result<f64, ExprError> {
    Evaluator::new().eval(expr)
}

/// Most fractional digits `format_value` will render.
pub const MAX_PRECISION: usize = 64;

/// Fixed-point rendering with `precision` fractional digits, at most
/// `MAX_PRECISION`.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.*}", precision.min(MAX_PRECISION), value)
}
