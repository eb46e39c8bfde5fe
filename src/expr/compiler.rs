// src/expr/compiler.rs

//! Shunting-yard conversion of infix token streams to postfix and prefix,
//! with a full derivation trace.
//!
//! Scan left to right: operands go straight to the output; `(` is pushed;
//! `)` pops to the output until the matching `(`, which is discarded; an
//! operator pops while the stack top is an operator of strictly greater
//! precedence, or equal precedence on a left-associative tie. Prefix form is
//! the same algorithm run over the reversed input with parentheses swapped,
//! and the result reversed back.

use crate::containers::Stack;
use crate::expr::ExprError;
use crate::expr::token::Token;

/// What the compiler did with one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Operand appended to the output.
    Append,
    /// Symbol pushed onto the operator stack.
    Push,
    /// Stack top popped and emitted to the output.
    Pop,
    /// Precedence comparison between the scanned operator and the stack top.
    Compare,
    /// Matching `(` dropped while closing a group.
    Discard,
}

impl StepAction {
    pub fn as_str(self) -> &'static str {
        match self {
            StepAction::Append => "append",
            StepAction::Push => "push",
            StepAction::Pop => "pop",
            StepAction::Compare => "compare",
            StepAction::Discard => "discard",
        }
    }
}

/// One entry of the derivation trace.
///
/// Steps are immutable once produced; stepwise presentation replays them but
/// never mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The symbol being processed when this step was recorded.
    pub symbol: String,
    pub action: StepAction,
    /// Operator stack at this instant, bottom to top.
    pub stack: Vec<String>,
    /// Output accumulated so far, compactly joined.
    pub output: String,
    /// Human-readable explanation for display.
    pub explanation: String,
}

/// Result of compiling an infix token stream: the output tokens (operands
/// and operators only) plus the trace that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub tokens: Vec<Token>,
    pub steps: Vec<Step>,
}

impl Compilation {
    /// Output tokens joined without separators, e.g. `ABC*+`.
    pub fn output_string(&self) -> String {
        join_tokens(&self.tokens)
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn snapshot(stack: &Stack<Token>) -> Vec<String> {
    stack.as_slice().iter().map(|t| t.to_string()).collect()
}

struct TraceBuilder {
    steps: Vec<Step>,
}

impl TraceBuilder {
    fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn record(
        &mut self,
        symbol: impl Into<String>,
        action: StepAction,
        stack: &Stack<Token>,
        output: &[Token],
        explanation: String,
    ) {
        self.steps.push(Step {
            symbol: symbol.into(),
            action,
            stack: snapshot(stack),
            output: join_tokens(output),
            explanation,
        });
    }
}

/// Convert an infix token stream to postfix.
///
/// Validation (character set, balance) is the caller's responsibility; the
/// only inputs rejected here are those the algorithm cannot complete on at
/// all: an empty stream and parentheses that never match.
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Compilation, ExprError> {
    if tokens.is_empty() {
        return Err(ExprError::EmptyExpression);
    }

    let mut trace = TraceBuilder::new();
    let mut stack: Stack<Token> = Stack::new();
    let mut output: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(text) => {
                output.push(token.clone());
                trace.record(
                    text.clone(),
                    StepAction::Append,
                    &stack,
                    &output,
                    format!("Operand '{text}' appended."),
                );
            }
            Token::LParen => {
                stack.push(Token::LParen);
                trace.record("(", StepAction::Push, &stack, &output, "Push (".to_string());
            }
            Token::RParen => {
                loop {
                    let at_lparen = match stack.peek() {
                        Some(Token::LParen) => true,
                        Some(_) => false,
                        None => return Err(ExprError::UnbalancedParens),
                    };
                    if at_lparen {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped.clone());
                        trace.record(
                            ")",
                            StepAction::Pop,
                            &stack,
                            &output,
                            format!("Pop '{popped}' to output"),
                        );
                    }
                }
                stack.pop();
                trace.record(
                    ")",
                    StepAction::Discard,
                    &stack,
                    &output,
                    "Discard (".to_string(),
                );
            }
            Token::Operator(op) => {
                loop {
                    let top = match stack.peek() {
                        Some(Token::Operator(top)) => *top,
                        _ => break,
                    };
                    let top_wins = top.precedence() > op.precedence()
                        || (top.precedence() == op.precedence() && !op.is_right_associative());
                    if !top_wins {
                        break;
                    }
                    trace.record(
                        op.to_string(),
                        StepAction::Compare,
                        &stack,
                        &output,
                        format!("Compare {op} with {top}"),
                    );
                    if let Some(popped) = stack.pop() {
                        output.push(popped.clone());
                        trace.record(
                            op.to_string(),
                            StepAction::Pop,
                            &stack,
                            &output,
                            format!("Pop {popped}"),
                        );
                    }
                }
                stack.push(Token::Operator(*op));
                trace.record(
                    op.to_string(),
                    StepAction::Push,
                    &stack,
                    &output,
                    format!("Push {op}"),
                );
            }
        }
    }

    while let Some(popped) = stack.pop() {
        if matches!(popped, Token::LParen) {
            return Err(ExprError::UnbalancedParens);
        }
        output.push(popped.clone());
        trace.record(
            popped.to_string(),
            StepAction::Pop,
            &stack,
            &output,
            format!("End pop {popped}"),
        );
    }

    if output.is_empty() {
        return Err(ExprError::EmptyExpression);
    }

    Ok(Compilation {
        tokens: output,
        steps: trace.steps,
    })
}

/// Convert an infix token stream to prefix.
///
/// Reverse the input, swap parenthesis direction, run the postfix algorithm,
/// reverse the result. The returned steps are those of the reversed scan,
/// annotated as such.
pub fn infix_to_prefix(tokens: &[Token]) -> Result<Compilation, ExprError> {
    let reversed: Vec<Token> = tokens
        .iter()
        .rev()
        .map(|token| match token {
            Token::LParen => Token::RParen,
            Token::RParen => Token::LParen,
            other => other.clone(),
        })
        .collect();

    let mut compiled = infix_to_postfix(&reversed)?;
    compiled.tokens.reverse();
    for step in &mut compiled.steps {
        step.explanation.push_str(" (reversed scan)");
    }
    Ok(compiled)
}
