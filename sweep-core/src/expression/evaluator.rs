//! Two-stack operator-precedence evaluator
//!
//! Operands and pending operators live on two stacks owned by a single
//! [`evaluate`] call. An operator on the stack is applied as soon as an
//! incoming operator binds no tighter than it does; a `(` is never applied and
//! only a matching `)` removes it. A small expect-operand flag rejects
//! adjacent operands or operators before they can reach the stacks.

use super::token::{Operator, Token, TokenKind};
use crate::error::EvalError;
use smallvec::SmallVec;

/// Evaluate a token sequence to a single integer
pub fn evaluate(tokens: &[Token]) -> Result<i64, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut machine = Machine::default();
    for token in tokens {
        machine.feed(token)?;
    }
    machine.finish()
}

#[derive(Debug, Clone, Copy)]
struct Operand {
    value: i64,
    position: usize,
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Op(Operator, usize),
    Open(usize),
}

#[derive(Debug)]
struct Machine {
    operands: SmallVec<[Operand; 16]>,
    operators: SmallVec<[Pending; 16]>,
    expect_operand: bool,
    last_position: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Self {
            operands: SmallVec::new(),
            operators: SmallVec::new(),
            expect_operand: true,
            last_position: 0,
        }
    }
}

impl Machine {
    fn feed(&mut self, token: &Token) -> Result<(), EvalError> {
        let position = token.position;
        self.last_position = position;

        match token.kind {
            TokenKind::Number(value) => {
                if !self.expect_operand {
                    return Err(EvalError::MissingOperator { position });
                }
                self.operands.push(Operand { value, position });
                self.expect_operand = false;
            }
            TokenKind::Op(op) => {
                if self.expect_operand {
                    return Err(EvalError::MissingOperand { position });
                }
                while let Some(&Pending::Op(top, top_position)) = self.operators.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    self.operators.pop();
                    self.reduce(top, top_position)?;
                }
                self.operators.push(Pending::Op(op, position));
                self.expect_operand = true;
            }
            TokenKind::LeftParen => {
                if !self.expect_operand {
                    return Err(EvalError::MissingOperator { position });
                }
                self.operators.push(Pending::Open(position));
            }
            TokenKind::RightParen => {
                if self.expect_operand {
                    return Err(EvalError::MissingOperand { position });
                }
                loop {
                    match self.operators.pop() {
                        Some(Pending::Op(op, op_position)) => self.reduce(op, op_position)?,
                        Some(Pending::Open(_)) => break,
                        None => return Err(EvalError::UnbalancedParenthesis { position }),
                    }
                }
            }
        }

        Ok(())
    }

    fn finish(mut self) -> Result<i64, EvalError> {
        if self.expect_operand {
            return Err(EvalError::MissingOperand {
                position: self.last_position,
            });
        }

        while let Some(pending) = self.operators.pop() {
            match pending {
                Pending::Op(op, position) => self.reduce(op, position)?,
                Pending::Open(position) => {
                    return Err(EvalError::UnbalancedParenthesis { position })
                }
            }
        }

        match self.operands.as_slice() {
            [result] => Ok(result.value),
            [] => Err(EvalError::EmptyExpression),
            [_, surplus, ..] => Err(EvalError::MissingOperator {
                position: surplus.position,
            }),
        }
    }

    /// Pop two operands, apply `op`, push the result
    fn reduce(&mut self, op: Operator, position: usize) -> Result<(), EvalError> {
        let rhs = self
            .operands
            .pop()
            .ok_or(EvalError::MissingOperand { position })?;
        let lhs = self
            .operands
            .pop()
            .ok_or(EvalError::MissingOperand { position })?;

        self.operands.push(Operand {
            value: op.apply(lhs.value, rhs.value, position)?,
            position: lhs.position,
        });
        Ok(())
    }
}
