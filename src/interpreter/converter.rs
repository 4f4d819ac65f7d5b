use ordered_float::OrderedFloat;

use crate::{
    interpreter::lexer::{Lexeme, Token, tokenize},
    postfix::{BinaryOperator, Function, Postfix, PostfixToken},
};

/// An entry of the operator stack that has not been emitted yet.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Paren,
    Operator(BinaryOperator),
    Negate,
    Function(Function),
}

impl Pending {
    /// Whether this entry must be emitted before `incoming` is pushed.
    ///
    /// Binary operators pop on equal precedence, making every level
    /// left-associative. A pending negation binds tighter than `+ - * /` but
    /// looser than `^`, so `-3+2` is `(-3)+2` while `-2^2` is `-(2^2)`.
    /// Parentheses and functions wait for their `)`.
    const fn pops_before(self, incoming: BinaryOperator) -> bool {
        match self {
            Self::Operator(op) => op.precedence() >= incoming.precedence(),
            Self::Negate => incoming.precedence() < BinaryOperator::Power.precedence(),
            Self::Paren | Self::Function(_) => false,
        }
    }

    const fn into_token(self) -> Option<PostfixToken> {
        match self {
            Self::Paren => None,
            Self::Operator(op) => Some(PostfixToken::Binary(op)),
            Self::Negate => Some(PostfixToken::UnaryMinus),
            Self::Function(function) => Some(PostfixToken::Function(function)),
        }
    }
}

/// Converts an infix expression to postfix order with the shunting-yard
/// algorithm.
///
/// The expression is expected to have passed
/// [`validate`](crate::interpreter::validator::validate); structure is not
/// re-checked here and conversion never fails.
///
/// A `-` is a unary minus when it starts the expression or follows `(` or
/// another operator symbol. Function names are held back until the `)` that
/// closes their argument.
///
/// # Example
/// ```
/// use xcalc::interpreter::converter::convert;
///
/// assert_eq!(convert("2 + 3 * 4").to_string(), "2 3 4 * +");
/// assert_eq!(convert("2^3^2").to_string(), "2 3 ^ 2 ^");
/// assert_eq!(convert("3--2").to_string(), "3 2 u- -");
/// assert_eq!(convert("cos(x) / 2").to_string(), "x cos 2 /");
/// ```
#[must_use]
pub fn convert(expression: &str) -> Postfix {
    let mut output = Vec::new();
    let mut pending = Vec::new();
    let mut unary_position = true;

    for Lexeme { token, .. } in tokenize(expression) {
        let next_is_unary =
            matches!(&token, Ok(t) if *t == Token::LParen || t.binary_operator().is_some());

        match token {
            Ok(Token::Number(value)) => output.push(PostfixToken::Number(OrderedFloat(value))),
            Ok(Token::Variable) => output.push(PostfixToken::Variable),
            Ok(Token::Identifier(name)) => {
                if let Some(function) = Function::from_name(&name) {
                    pending.push(Pending::Function(function));
                }
            },
            Ok(Token::LParen) => pending.push(Pending::Paren),
            Ok(Token::RParen) => close_paren(&mut pending, &mut output),
            Ok(Token::Minus) if unary_position => pending.push(Pending::Negate),
            Ok(token) => {
                if let Some(op) = token.binary_operator() {
                    push_operator(op, &mut pending, &mut output);
                }
            },
            Err(_) => {},
        }

        unary_position = next_is_unary;
    }

    while let Some(entry) = pending.pop() {
        output.extend(entry.into_token());
    }

    Postfix::from(output)
}

fn push_operator(incoming: BinaryOperator,
                 pending: &mut Vec<Pending>,
                 output: &mut Vec<PostfixToken>) {
    while let Some(&top) = pending.last() {
        if !top.pops_before(incoming) {
            break;
        }
        pending.pop();
        output.extend(top.into_token());
    }
    pending.push(Pending::Operator(incoming));
}

/// Emits everything down to the matching `(`, then the function that `(`
/// belonged to, if any.
fn close_paren(pending: &mut Vec<Pending>, output: &mut Vec<PostfixToken>) {
    while let Some(entry) = pending.pop() {
        if matches!(entry, Pending::Paren) {
            break;
        }
        output.extend(entry.into_token());
    }

    if let Some(&Pending::Function(function)) = pending.last() {
        pending.pop();
        output.push(PostfixToken::Function(function));
    }
}
