use logos::Logos;

use crate::postfix::BinaryOperator;

/// Reasons the lexer could not produce a token.
///
/// Neither is fatal to the lexer itself: scanning resumes after the offending
/// text, and callers decide what the error means.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not part of the expression language, such as `$`.
    #[default]
    UnexpectedCharacter,
    /// A run of dots with no digit before its second dot, such as `.` or
    /// `..5`.
    MalformedNumber,
}

/// Represents a lexical token of an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.`.
    ///
    /// The whole digit/dot run is one token but only its longest numeric
    /// prefix is read, so `1.2.3` is `1.2` and `2..` is `2`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// The free variable `x`.
    #[token("x")]
    Variable,
    /// A maximal run of letters that does not start with `x`, such as `sin`
    /// or `exp`.
    #[regex(r"[a-wyzA-Z][a-zA-Z]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the binary operator this token is written as, if any.
    #[must_use]
    pub const fn binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Subtract),
            Self::Star => Some(BinaryOperator::Multiply),
            Self::Slash => Some(BinaryOperator::Divide),
            Self::Caret => Some(BinaryOperator::Power),
            _ => None,
        }
    }
}

/// A token, or lexing failure, together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    /// The token, or why none could be produced.
    pub token:  Result<Token, LexError>,
    /// The source text the lexeme covers.
    pub text:   &'a str,
    /// Byte offset of the lexeme in the source.
    pub offset: usize,
}

/// Splits an expression into lexemes.
///
/// Whitespace is skipped. Text that cannot be tokenized shows up as an `Err`
/// lexeme rather than ending the scan, so every character of the input is
/// accounted for in order.
///
/// # Example
/// ```
/// use xcalc::interpreter::lexer::{LexError, Token, tokenize};
///
/// let lexemes = tokenize("exp(x) $");
/// let tokens: Vec<_> = lexemes.into_iter().map(|l| l.token).collect();
///
/// assert_eq!(tokens,
///            vec![Ok(Token::Identifier("exp".to_string())),
///                 Ok(Token::LParen),
///                 Ok(Token::Variable),
///                 Ok(Token::RParen),
///                 Err(LexError::UnexpectedCharacter)]);
///
/// let numbers: Vec<_> = tokenize("1.2.3 2.. .").into_iter().map(|l| l.token).collect();
/// assert_eq!(numbers,
///            vec![Ok(Token::Number(1.2)),
///                 Ok(Token::Number(2.0)),
///                 Err(LexError::MalformedNumber)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme<'_>> {
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(token) = lexer.next() {
        lexemes.push(Lexeme { token,
                              text: lexer.slice(),
                              offset: lexer.span().start });
    }

    lexemes
}

/// Parses a numeric literal from the current token slice.
///
/// Everything from the second `.` on is ignored.
///
/// # Returns
/// - `Ok(f64)`: The value of the longest numeric prefix.
/// - `Err(LexError::MalformedNumber)`: If that prefix has no digit, e.g. `.`
///   or `..5`.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Result<f64, LexError> {
    longest_number_prefix(lex.slice()).parse()
                                      .map_err(|_| LexError::MalformedNumber)
}

/// Cuts a digit/dot run before its second `.`.
fn longest_number_prefix(run: &str) -> &str {
    let second_dot = run.match_indices('.').nth(1).map_or(run.len(), |(i, _)| i);
    &run[..second_dot]
}
