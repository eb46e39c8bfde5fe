// src/expr/mod.rs

//! Infix expression compiler and evaluator.
//!
//! The pipeline is: [`validate`] (optional, caller's choice) →
//! [`token::tokenize`] → [`compiler`] (shunting-yard to postfix, or prefix
//! via the reversed scan) → [`eval`] (stack evaluation over `i64`).
//!
//! Compilation records a [`compiler::Step`] for every symbol processed, so a
//! caller can replay the derivation token by token; the trace is the product,
//! not a debugging side effect.

use thiserror::Error;

pub mod compiler;
pub mod eval;
pub mod token;
pub mod validate;

pub use compiler::{Compilation, Step, StepAction, infix_to_postfix, infix_to_prefix};
pub use eval::evaluate_postfix;
pub use token::{Op, Token, tokenize};
pub use validate::validate_expression;

/// Errors from expression validation, compilation and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("invalid character {0:?} in expression")]
    InvalidCharacter(char),

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("operand {0:?} is not an integer")]
    NonNumericOperand(String),

    #[error("operator '{op}' is missing an operand")]
    MissingOperand { op: char },

    #[error("malformed postfix: {0} values left on the stack")]
    DanglingOperands(usize),

    #[error("division by zero")]
    DivisionByZero,

    #[error("negative exponent {0}")]
    NegativeExponent(i64),

    #[error("arithmetic overflow")]
    Overflow,
}

/// Stock expressions offered by the standalone conversion tool.
pub const EXAMPLE_EXPRESSIONS: [&str; 5] = [
    "A+B*C-(D/E+F)^G",
    "A*(B+C)/D",
    "(A+B)*(C-D)",
    "a+b*c",
    "((A+B)*C)-D^E^F",
];
