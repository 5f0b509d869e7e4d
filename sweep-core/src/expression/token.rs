//! Tokens and the character-level tokenizer

use crate::error::EvalError;

/// The four binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero
    Div,
}

impl Operator {
    /// Operator for a symbol, if it is one
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Source symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Apply to `lhs` and `rhs` with checked 64-bit arithmetic
    ///
    /// `position` is the operator's byte offset, used for error reporting.
    pub fn apply(self, lhs: i64, rhs: i64, position: usize) -> Result<i64, EvalError> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Sub => lhs.checked_sub(rhs),
            Operator::Mul => lhs.checked_mul(rhs),
            Operator::Div => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                lhs.checked_div(rhs)
            }
        };
        result.ok_or(EvalError::Overflow { position })
    }
}

/// What a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Non-negative integer literal
    Number(i64),
    /// Binary operator
    Op(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// A token and the byte offset where it starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Token payload
    pub kind: TokenKind,
    /// Byte offset into the source expression
    pub position: usize,
}

impl Token {
    /// Create a token
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// How the tokenizer treats characters outside the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizeMode {
    /// Drop them silently
    #[default]
    Lenient,
    /// Reject them with [`EvalError::UnexpectedCharacter`]; whitespace is still skipped
    Strict,
}

/// Split `expr` into tokens, silently dropping unrecognized characters
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    tokenize_with(expr, TokenizeMode::Lenient)
}

/// Split `expr` into tokens under the given mode
///
/// Runs of ASCII digits become one [`TokenKind::Number`]. Every operator and
/// parenthesis is its own token. Only literals that overflow `i64` fail in
/// lenient mode.
pub fn tokenize_with(expr: &str, mode: TokenizeMode) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut literal: Option<(i64, usize)> = None;

    for (position, ch) in expr.char_indices() {
        if let Some(digit) = ch.to_digit(10) {
            let (value, start) = literal.unwrap_or((0, position));
            let value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(digit)))
                .ok_or(EvalError::LiteralOverflow { position: start })?;
            literal = Some((value, start));
            continue;
        }

        if let Some((value, start)) = literal.take() {
            tokens.push(Token::new(TokenKind::Number(value), start));
        }

        let kind = match ch {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => match Operator::from_char(ch) {
                Some(op) => TokenKind::Op(op),
                None if ch.is_whitespace() || mode == TokenizeMode::Lenient => continue,
                None => return Err(EvalError::UnexpectedCharacter { ch, position }),
            },
        };
        tokens.push(Token::new(kind, position));
    }

    if let Some((value, start)) = literal {
        tokens.push(Token::new(TokenKind::Number(value), start));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("3+(2*5)").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number(3),
                TokenKind::Op(Operator::Add),
                TokenKind::LeftParen,
                TokenKind::Number(2),
                TokenKind::Op(Operator::Mul),
                TokenKind::Number(5),
                TokenKind::RightParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = tokenize(" 12 - 345").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 4, 6]);
        assert_eq!(tokens[2].kind, TokenKind::Number(345));
    }

    #[test]
    fn test_tokenize_lenient_drops_unknown() {
        let tokens = tokenize("1 + x2").unwrap();
        // 'x' splits nothing; the digit after it starts a new literal
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number(1),
                TokenKind::Op(Operator::Add),
                TokenKind::Number(2),
            ]
        );
        assert!(tokenize("abc").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_strict_rejects_unknown() {
        let err = tokenize_with("1 + x2", TokenizeMode::Strict).unwrap_err();
        assert_eq!(err, EvalError::UnexpectedCharacter { ch: 'x', position: 4 });

        // Whitespace is fine in strict mode
        assert_eq!(
            tokenize_with(" 1\t+\n2 ", TokenizeMode::Strict).unwrap().len(),
            3
        );
    }

    #[test]
    fn test_tokenize_literal_overflow() {
        let err = tokenize("1+99999999999999999999").unwrap_err();
        assert_eq!(err, EvalError::LiteralOverflow { position: 2 });
        assert!(tokenize("9223372036854775807").is_ok());
    }

    #[test]
    fn test_tokenize_non_ascii_digits_are_not_literals() {
        // Arabic-Indic digit three
        assert!(tokenize("\u{0663}").unwrap().is_empty());
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Sub.apply(2, 5, 0), Ok(-3));
        assert_eq!(Operator::Div.apply(7, -2, 0), Ok(-3));
        assert_eq!(
            Operator::Div.apply(1, 0, 4),
            Err(EvalError::DivisionByZero { position: 4 })
        );
        assert_eq!(
            Operator::Mul.apply(i64::MAX, 2, 1),
            Err(EvalError::Overflow { position: 1 })
        );
        assert_eq!(
            Operator::Div.apply(i64::MIN, -1, 3),
            Err(EvalError::Overflow { position: 3 })
        );
    }

    #[test]
    fn test_operator_precedence() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Div.precedence(), Operator::Mul.precedence());
        assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
        assert_eq!(Operator::from_char('/'), Some(Operator::Div));
        assert_eq!(Operator::Div.symbol(), '/');
        assert_eq!(Operator::from_char('%'), None);
    }
}
