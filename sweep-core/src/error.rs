//! Core error types (deterministic only)

use thiserror::Error;

/// Precondition violations for the array and window algorithms
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input to a sorted-only routine is not in ascending order
    #[error("sequence is not sorted: element at index {index} is smaller than its predecessor")]
    Unsorted {
        /// First index whose element breaks the ascending order
        index: usize,
    },

    /// Window width is zero or larger than the sequence
    #[error("invalid window width {width} for sequence of length {len}")]
    InvalidWindow {
        /// Requested width
        width: usize,
        /// Length of the sequence
        len: usize,
    },

    /// Routine requires non-negative elements
    #[error("negative element at index {index}")]
    NegativeElement {
        /// Index of the first negative element
        index: usize,
    },
}

/// Coarse reason code for an [`EvalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Structural problem: parentheses, operands or operators out of place
    Malformed,
    /// Right operand of a division was zero
    DivisionByZero,
    /// Result or literal does not fit in 64 bits
    Overflow,
    /// Character that is not part of the expression grammar
    InvalidToken,
}

/// Failures while tokenizing or evaluating an arithmetic expression
///
/// Positions are byte offsets into the source expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No tokens to evaluate
    #[error("empty expression")]
    EmptyExpression,

    /// Unrecognized character (strict tokenizing only)
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter {
        /// The rejected character
        ch: char,
        /// Byte offset of the character
        position: usize,
    },

    /// Numeric literal larger than `i64::MAX`
    #[error("numeric literal at position {position} is too large")]
    LiteralOverflow {
        /// Byte offset where the literal starts
        position: usize,
    },

    /// A `(` without its `)` or the other way round
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis {
        /// Byte offset of the unmatched parenthesis
        position: usize,
    },

    /// Operator applied with fewer than two operands available
    #[error("missing operand for operator at position {position}")]
    MissingOperand {
        /// Byte offset of the operator
        position: usize,
    },

    /// Two operands with no operator between them
    #[error("missing operator before operand at position {position}")]
    MissingOperator {
        /// Byte offset of the surplus operand
        position: usize,
    },

    /// Integer division by zero
    #[error("division by zero at position {position}")]
    DivisionByZero {
        /// Byte offset of the `/` operator
        position: usize,
    },

    /// Intermediate result does not fit in `i64`
    #[error("arithmetic overflow at position {position}")]
    Overflow {
        /// Byte offset of the operator that overflowed
        position: usize,
    },
}

impl EvalError {
    /// Reason code for this error
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::EmptyExpression
            | EvalError::UnbalancedParenthesis { .. }
            | EvalError::MissingOperand { .. }
            | EvalError::MissingOperator { .. } => EvalErrorKind::Malformed,
            EvalError::DivisionByZero { .. } => EvalErrorKind::DivisionByZero,
            EvalError::LiteralOverflow { .. } | EvalError::Overflow { .. } => {
                EvalErrorKind::Overflow
            }
            EvalError::UnexpectedCharacter { .. } => EvalErrorKind::InvalidToken,
        }
    }

    /// Byte offset of the offending token, when there is one
    pub fn position(&self) -> Option<usize> {
        match self {
            EvalError::EmptyExpression => None,
            EvalError::UnexpectedCharacter { position, .. }
            | EvalError::LiteralOverflow { position }
            | EvalError::UnbalancedParenthesis { position }
            | EvalError::MissingOperand { position }
            | EvalError::MissingOperator { position }
            | EvalError::DivisionByZero { position }
            | EvalError::Overflow { position } => Some(*position),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
