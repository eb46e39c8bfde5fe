// src/expr/eval.rs

//! Stack evaluation of postfix token streams over `i64`.

use crate::containers::Stack;
use crate::expr::ExprError;
use crate::expr::token::{Op, Token};

/// Evaluate a postfix token stream.
///
/// Operands push their numeric value; an operator pops the right operand
/// first, then the left, and pushes `left op right`. A well-formed stream
/// leaves exactly one value, the result. Underflow, leftover values,
/// non-numeric operands and arithmetic failures all come back as
/// [`ExprError`]; malformed input never panics.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<i64, ExprError> {
    let mut stack: Stack<i64> = Stack::new();

    for token in tokens {
        match token {
            Token::Operand(text) => {
                let value = text
                    .parse::<i64>()
                    .map_err(|_| ExprError::NonNumericOperand(text.clone()))?;
                stack.push(value);
            }
            Token::Operator(op) => {
                let right = stack.pop().ok_or(ExprError::MissingOperand {
                    op: op.symbol(),
                })?;
                let left = stack.pop().ok_or(ExprError::MissingOperand {
                    op: op.symbol(),
                })?;
                stack.push(apply(*op, left, right)?);
            }
            // Parentheses never survive compilation; seeing one means the
            // stream was hand-built and malformed.
            Token::LParen | Token::RParen => return Err(ExprError::UnbalancedParens),
        }
    }

    let result = stack.pop().ok_or(ExprError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(ExprError::DanglingOperands(stack.len()));
    }
    Ok(result)
}

fn apply(op: Op, left: i64, right: i64) -> Result<i64, ExprError> {
    match op {
        Op::Add => left.checked_add(right).ok_or(ExprError::Overflow),
        Op::Sub => left.checked_sub(right).ok_or(ExprError::Overflow),
        Op::Mul => left.checked_mul(right).ok_or(ExprError::Overflow),
        Op::Div => floor_div(left, right),
        Op::Pow => pow(left, right),
    }
}

/// Integer division truncating toward negative infinity.
fn floor_div(dividend: i64, divisor: i64) -> Result<i64, ExprError> {
    if divisor == 0 {
        return Err(ExprError::DivisionByZero);
    }
    let quotient = dividend.checked_div(divisor).ok_or(ExprError::Overflow)?;
    if dividend % divisor != 0 && (dividend < 0) != (divisor < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

fn pow(base: i64, exponent: i64) -> Result<i64, ExprError> {
    if exponent < 0 {
        return Err(ExprError::NegativeExponent(exponent));
    }
    let exponent = u32::try_from(exponent).map_err(|_| ExprError::Overflow)?;
    base.checked_pow(exponent).ok_or(ExprError::Overflow)
}
