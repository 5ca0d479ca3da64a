//! Expression parsing and evaluation
//!
//! Turns a number sentence such as `(1+2)*3` into a tree and folds it into
//! an `f64`.

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexical;
pub mod parser;
pub mod sanitize;

pub use ast::{BinOp, Expr};
pub use error::ExprError;
pub use eval::{evaluate, format_value, Evaluator};
pub use parser::{parse_expr, Parser};
pub use sanitize::sanitize;

/// Sanitize, parse and evaluate raw text in one call
pub fn evaluate_str(raw: &str) -> Result<f64, ExprError> {
    let expression = sanitize(raw)?;
    let tree = parse_expr(&expression)?;
    evaluate(&tree)
}
