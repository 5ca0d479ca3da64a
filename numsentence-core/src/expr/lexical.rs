//! Terminal alphabet of the number sentence grammar
//!
//! Numerals are digits with at most one decimal point, operators are
//! `+ - * /`, and brackets are `(` and `)`.

/// Digit or decimal point
pub fn is_numeral_symbol(symbol: char) -> bool {
    symbol.is_ascii_digit() || symbol == '.'
}

/// One of the four binary operators
pub fn is_operator_symbol(symbol: char) -> bool {
    matches!(symbol, '+' | '-' | '*' | '/')
}

/// Signed bracket increment: +1 for `(`, -1 for `)`, 0 otherwise.
pub fn bracket_delta(symbol: char) -> i32 {
    match symbol {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

/// Any symbol the grammar accepts
pub fn is_grammar_symbol(symbol: char) -> bool {
    is_numeral_symbol(symbol) || is_operator_symbol(symbol) || bracket_delta(symbol) != 0
}

/// True when every character is a numeral symbol and `.` occurs at most once.
pub fn is_numeral(text: &str) -> bool {
    let mut has_decimal = false;

    for symbol in text.chars() {
        if !is_numeral_symbol(symbol) {
            return false;
        }
        if symbol == '.' {
            if has_decimal {
                return false;
            }
            has_decimal = true;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeral_symbols() {
        for symbol in "0123456789.".chars() {
            assert!(is_numeral_symbol(symbol));
        }
        assert!(!is_numeral_symbol('-'));
        assert!(!is_numeral_symbol('e'));
        assert!(!is_numeral_symbol(','));
    }

    #[test]
    fn test_operator_symbols() {
        for symbol in "+-*/".chars() {
            assert!(is_operator_symbol(symbol));
        }
        assert!(!is_operator_symbol('%'));
        assert!(!is_operator_symbol('('));
        assert!(!is_operator_symbol('^'));
    }

    #[test]
    fn test_bracket_delta() {
        assert_eq!(bracket_delta('('), 1);
        assert_eq!(bracket_delta(')'), -1);
        assert_eq!(bracket_delta('['), 0);
        assert_eq!(bracket_delta('7'), 0);
    }

    #[test]
    fn test_is_numeral() {
        assert!(is_numeral("42"));
        assert!(is_numeral("3.14"));
        assert!(is_numeral(".5"));
        assert!(is_numeral("7."));
        assert!(!is_numeral("1.2.3"));
        assert!(!is_numeral("12a"));
        assert!(!is_numeral("-1"));
    }

    #[test]
    fn test_grammar_symbols() {
        assert!("0123456789.+-*/()".chars().all(is_grammar_symbol));
        assert!(!is_grammar_symbol(' '));
        assert!(!is_grammar_symbol('x'));
    }
}
