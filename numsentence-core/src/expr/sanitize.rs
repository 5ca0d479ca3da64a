//! Input sanitization
//!
//! Reduces raw text to the grammar alphabet before it reaches the parser.

use super::error::ExprError;
use super::lexical::is_grammar_symbol;

/// Strip whitespace and reject any symbol outside the grammar.
///
/// `position` in the returned error is the character index in `raw`.
pub fn sanitize(raw: &str) -> Result<String, ExprError> {
    let mut expression = String::with_capacity(raw.len());

    for (position, symbol) in raw.chars().enumerate() {
        if is_grammar_symbol(symbol) {
            expression.push(symbol);
        } else if !symbol.is_whitespace() {
            return Err(ExprError::Lexical { symbol, position });
        }
    }

    log::trace!("sanitized {} chars into {:?}", raw.len(), expression);
    Ok(expression)
}
