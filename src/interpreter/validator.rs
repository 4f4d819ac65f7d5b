use crate::{
    error::ParseError,
    interpreter::lexer::{LexError, Lexeme, Token, tokenize},
    postfix::Function,
};

/// Result type used by the validator.
pub type ParseResult<T> = Result<T, ParseError>;

/// Whether an expression references the variable `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariablePresence {
    /// `x` does not occur.
    Absent,
    /// `x` occurs at least once.
    Present,
}

impl VariablePresence {
    /// Returns `true` for [`VariablePresence::Present`].
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Checks that an expression is well formed and reports whether it uses `x`.
///
/// The scan tracks open parentheses and whether an operand is expected next.
/// A binary operator in operand position is rejected unless it is `-`, which
/// is then a unary minus. Names must be built-in functions. The expression is
/// valid only if every `(` is closed and it does not end expecting an
/// operand.
///
/// Characters outside the expression language, such as `$`, are skipped
/// without complaint. A number with extra dots reads only up to its second
/// dot (`1.2.3` is `1.2`); a dot run with no digit in that prefix, like `.`,
/// is rejected.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found.
///
/// # Example
/// ```
/// use xcalc::{
///     error::ParseError,
///     interpreter::validator::{VariablePresence, validate},
/// };
///
/// assert_eq!(validate("x * 2 + 1"), Ok(VariablePresence::Present));
/// assert_eq!(validate("-(3) + 2"), Ok(VariablePresence::Absent));
/// assert_eq!(validate("(1 + 2"), Err(ParseError::UnclosedParen { offset: 0 }));
/// assert!(matches!(validate("2 * / 3"), Err(ParseError::MisplacedOperator { offset: 4, .. })));
/// ```
pub fn validate(expression: &str) -> ParseResult<VariablePresence> {
    let mut open_parens = Vec::new();
    let mut expect_operand = true;
    let mut presence = VariablePresence::Absent;

    for Lexeme { token, text, offset } in tokenize(expression) {
        let token = match token {
            Ok(token) => token,
            Err(LexError::MalformedNumber) => {
                return Err(ParseError::MalformedNumber { literal: text.to_string(),
                                                         offset });
            },
            Err(LexError::UnexpectedCharacter) => continue,
        };

        match token {
            Token::LParen => {
                open_parens.push(offset);
                expect_operand = true;
            },
            Token::RParen => {
                if open_parens.pop().is_none() {
                    return Err(ParseError::UnmatchedClosingParen { offset });
                }
                expect_operand = false;
            },
            Token::Number(_) => expect_operand = false,
            Token::Variable => {
                presence = VariablePresence::Present;
                expect_operand = false;
            },
            Token::Identifier(name) => {
                if Function::from_name(&name).is_none() {
                    return Err(ParseError::UnknownFunction { name, offset });
                }
                expect_operand = true;
            },
            Token::Minus => expect_operand = true,
            Token::Plus | Token::Star | Token::Slash | Token::Caret => {
                if expect_operand {
                    return Err(ParseError::MisplacedOperator { operator: text.to_string(),
                                                               offset });
                }
                expect_operand = true;
            },
        }
    }

    if let Some(&offset) = open_parens.last() {
        return Err(ParseError::UnclosedParen { offset });
    }
    if expect_operand {
        return Err(ParseError::UnexpectedEnd { offset: expression.len() });
    }

    Ok(presence)
}
