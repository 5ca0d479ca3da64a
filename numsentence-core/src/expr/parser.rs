//! Recursive-descent parser for number sentences
//!
//! Grammar (G):
//!
//! ```text
//! P = c              c a numeral
//! P = (A k B)        k in {+,-,*,/}, A and B in G
//! P = -A             A in G
//! ```
//!
//! Parsing works on `[start, end)` ranges of the input and never copies or
//! mutates it. Each range is handled by the first rule that applies:
//!
//! 1. the whole range is one numeral -> leaf
//! 2. leading `-` -> `0 - rest`
//! 3. the range is wrapped in one matched pair of parentheses -> parse the
//!    inside (repeated for nested wrapping pairs)
//! 4. split at the top-level operator that groups left to right and parse
//!    both sides
//!
//! Anything else is a structural error.

use super::ast::{BinOp, Expr};
use super::error::ExprError;
use super::lexical::{
    bracket_delta, is_grammar_symbol, is_numeral, is_numeral_symbol, is_operator_symbol,
};
use crate::config::Config;

/// Default bound on nested parse calls.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Largest depth limit that still fits comfortably on a 2 MiB thread stack.
pub const MAX_DEPTH_CEILING: usize = 4096;

/// Parse an expression string into our AST using default limits
pub fn parse_expr(input: &str) -> Result<Expr, ExprError> {
    Parser::new().parse(input)
}

/// Number sentence parser
#[derive(Debug, Clone)]
pub struct Parser {
    /// Maximum recursion depth before giving up
    max_depth: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limits above `MAX_DEPTH_CEILING` are clamped to it.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_max_depth(config.max_depth)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse a sanitized expression (no whitespace) into a tree
    pub fn parse(&self, input: &str) -> Result<Expr, ExprError> {
        // Only ASCII survives this check, so byte offsets are char offsets below.
        if let Some((position, symbol)) = input
            .chars()
            .enumerate()
            .find(|(_, symbol)| !is_grammar_symbol(*symbol))
        {
            return Err(ExprError::Lexical { symbol, position });
        }

        log::debug!("parsing {:?}", input);
        let src = input.as_bytes();
        self.parse_range(src, 0, src.len(), 0)
    }

    fn parse_range(
        &self,
        src: &[u8],
        start: usize,
        end: usize,
        depth: usize,
    ) -> Result<Expr, ExprError> {
        if depth >= self.max_depth {
            return Err(ExprError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        if start >= end {
            return Err(ExprError::structural("empty expression", start));
        }

        let first = src[start] as char;

        // Base case: a numeral spanning the whole range
        if is_numeral_symbol(first) && numeral_run_end(src, start, end)? == end {
            return numeral_leaf(src, start, end);
        }

        // Negation: -A becomes 0 - A
        if first == '-' {
            log::trace!("negation at {}", start);
            let operand = self.parse_range(src, start + 1, end, depth + 1)?;
            return Ok(Expr::negation(operand));
        }

        check_balance(src, start, end)?;

        let (inner_start, inner_end) = strip_outer_parens(src, start, end);
        if inner_start != start {
            if inner_start >= inner_end {
                return Err(ExprError::structural("empty parentheses", start));
            }
            return self.parse_range(src, inner_start, inner_end, depth + 1);
        }

        let Some(split) = find_split_operator(src, start, end) else {
            return Err(ExprError::structural(
                "expected an operator between operands",
                start,
            ));
        };
        let symbol = src[split] as char;
        let op = BinOp::from_symbol(symbol)
            .ok_or_else(|| ExprError::structural(format!("'{}' is not an operator", symbol), split))?;
        if split + 1 == end {
            return Err(ExprError::structural(
                format!("missing right operand for '{}'", symbol),
                split,
            ));
        }

        log::trace!("split [{}, {}) at '{}' ({})", start, end, symbol, split);
        let left = self.parse_range(src, start, split, depth + 1)?;
        let right = self.parse_range(src, split + 1, end, depth + 1)?;

        Ok(Expr::binary(op, left, right))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// End of the maximal numeral run starting at `start`.
///
/// Fails on a second decimal point within the run.
fn numeral_run_end(src: &[u8], start: usize, end: usize) -> Result<usize, ExprError> {
    let run_end = (start..end)
        .find(|&i| !is_numeral_symbol(src[i] as char))
        .unwrap_or(end);

    let run = String::from_utf8_lossy(&src[start..run_end]);
    if !is_numeral(&run) {
        return Err(ExprError::malformed(run));
    }

    Ok(run_end)
}

fn numeral_leaf(src: &[u8], start: usize, end: usize) -> Result<Expr, ExprError> {
    let text = String::from_utf8_lossy(&src[start..end]).into_owned();
    if !is_numeral(&text) || !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(ExprError::malformed(text));
    }
    Ok(Expr::Numeral(text))
}

/// Reject ranges whose parentheses do not pair up.
///
/// An unclosed `(` is reported at the outermost one left open.
fn check_balance(src: &[u8], start: usize, end: usize) -> Result<(), ExprError> {
    let mut open = Vec::new();

    for (i, &b) in src.iter().enumerate().take(end).skip(start) {
        match b {
            b'(' => open.push(i),
            b')' => {
                if open.pop().is_none() {
                    return Err(ExprError::structural("unmatched ')'", i));
                }
            }
            _ => {}
        }
    }

    match open.first() {
        Some(&position) => Err(ExprError::structural("unmatched '('", position)),
        None => Ok(()),
    }
}

/// Does the pair opened at `start` close exactly at `end - 1`?
fn is_wrapped(src: &[u8], start: usize, end: usize) -> bool {
    if end - start < 2 || src[start] != b'(' || src[end - 1] != b')' {
        return false;
    }

    let mut depth = 0;
    for (i, &b) in src.iter().enumerate().take(end).skip(start) {
        depth += bracket_delta(b as char);
        if depth == 0 {
            return i == end - 1;
        }
    }
    false
}

/// Remove every outermost wrapping pair of parentheses.
fn strip_outer_parens(src: &[u8], mut start: usize, mut end: usize) -> (usize, usize) {
    while start < end && is_wrapped(src, start, end) {
        start += 1;
        end -= 1;
    }
    (start, end)
}

/// Index of the operator to split the range at, if any.
///
/// Only depth-0 operators past the first character qualify, and an operator
/// directly after another operator is a sign belonging to its right operand.
/// Such a sign covers one operand only (`0+-1+2` is `(0+(0-1))+2`), unlike a
/// sign leading the whole range, which covers everything after it.
/// The rightmost candidate wins, so unparenthesized chains group left to
/// right: `1-2-3` is `(1-2)-3`.
fn find_split_operator(src: &[u8], start: usize, end: usize) -> Option<usize> {
    let mut depth = 0;
    let mut split = None;

    for i in start..end {
        let symbol = src[i] as char;
        depth += bracket_delta(symbol);

        if depth == 0
            && i > start
            && is_operator_symbol(symbol)
            && !is_operator_symbol(src[i - 1] as char)
        {
            split = Some(i);
        }
    }

    split
}
