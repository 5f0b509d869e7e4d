//! Arithmetic expression evaluation
//!
//! A tokenizer turns the source string into positioned [`Token`]s and a
//! two-stack machine folds them into one `i64`. Both stages report failures
//! as [`EvalError`](crate::error::EvalError) values carrying the byte offset
//! of the offending token.
//!
//! ```rust
//! use sweep_core::expression::{eval, evaluate, tokenize};
//!
//! assert_eq!(evaluate(&tokenize("3+(2*5)").unwrap()), Ok(13));
//! assert!(eval("10/0").is_err());
//! ```

mod evaluator;
mod token;

pub use evaluator::evaluate;
pub use token::{tokenize, tokenize_with, Operator, Token, TokenKind, TokenizeMode};

use crate::error::EvalError;

/// Tokenize leniently and evaluate `expr`
pub fn eval(expr: &str) -> Result<i64, EvalError> {
    eval_with(expr, TokenizeMode::Lenient)
}

/// Tokenize under `mode` and evaluate `expr`
pub fn eval_with(expr: &str, mode: TokenizeMode) -> Result<i64, EvalError> {
    let tokens = tokenize_with(expr, mode)?;
    evaluate(&tokens)
}
