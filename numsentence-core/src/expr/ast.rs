//! AST definitions for number sentences

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expression tree
///
/// Every binary node owns both of its operands; trees are built bottom-up by
/// the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Numeral: 42, 3.14, .5
    Numeral(String),

    /// Binary operation: (a + b)
    Binary {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BinOp {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl Expr {
    pub fn numeral(text: impl Into<String>) -> Self {
        Expr::Numeral(text.into())
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// `-a` in the grammar's normal form: `0 - a`
    pub fn negation(operand: Expr) -> Self {
        Expr::binary(BinOp::Sub, Expr::numeral("0"), operand)
    }

    /// Height of the tree; a lone numeral has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Numeral(_) => 1,
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Fully parenthesized grammar form, e.g. `((1+2)*3)`
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Numeral(text) => write!(f, "{}", text),
            Expr::Binary { left, op, right } => {
                write!(f, "({}{}{})", left, op.as_str(), right)
            }
        }
    }
}
