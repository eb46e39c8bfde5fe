// src/expr/validate.rs

//! Explicit pre-check for infix expressions.
//!
//! The compiler itself stays lenient and accepts whatever the caller feeds
//! it; callers that want early rejection (the `convert` CLI path, or anyone
//! composing a safety-checked pipeline) run this first.

use std::sync::LazyLock;

use regex::Regex;

use crate::expr::ExprError;

/// Anything outside digits, ASCII letters, the five operators, parentheses
/// and whitespace.
static ILLEGAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9A-Za-z+\-*/^()\s]").expect("character-class pattern is valid")
});

/// Check that `expression` is non-empty, uses only the allowed character set
/// and has balanced parentheses (no prefix may close more groups than it
/// opened).
pub fn validate_expression(expression: &str) -> Result<(), ExprError> {
    if expression.trim().is_empty() {
        return Err(ExprError::EmptyExpression);
    }

    if let Some(found) = ILLEGAL.find(expression) {
        let c = found.as_str().chars().next().unwrap_or('?');
        return Err(ExprError::InvalidCharacter(c));
    }

    let mut balance = 0i64;
    for c in expression.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance -= 1;
                if balance < 0 {
                    return Err(ExprError::UnbalancedParens);
                }
            }
            _ => {}
        }
    }
    if balance != 0 {
        return Err(ExprError::UnbalancedParens);
    }

    Ok(())
}
