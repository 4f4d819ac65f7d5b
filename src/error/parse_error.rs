#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all reasons an expression can be rejected as invalid.
///
/// Offsets are byte positions into the original expression.
pub enum ParseError {
    /// Found a `)` with no open `(` to close.
    UnmatchedClosingParen {
        /// Position of the `)`.
        offset: usize,
    },
    /// An `(` was never closed.
    UnclosedParen {
        /// Position of the innermost unclosed `(`.
        offset: usize,
    },
    /// A binary operator appeared where an operand was expected.
    MisplacedOperator {
        /// The operator as written.
        operator: String,
        /// Position of the operator.
        offset:   usize,
    },
    /// An alphabetic name is not one of the built-in functions.
    UnknownFunction {
        /// The name as written.
        name:   String,
        /// Position where the name starts.
        offset: usize,
    },
    /// A run of dots holds no digit to read a number from, e.g. `.`.
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// Position where the literal starts.
        offset:  usize,
    },
    /// The expression ended while an operand was still expected.
    UnexpectedEnd {
        /// Length of the expression.
        offset: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClosingParen { offset } => write!(f,
                                                             "Invalid expression at position {offset}: ')' has no matching '('."),
            Self::UnclosedParen { offset } => {
                write!(f, "Invalid expression at position {offset}: '(' is never closed.")
            },
            Self::MisplacedOperator { operator, offset } => write!(f,
                                                                   "Invalid expression at position {offset}: Expected an operand but found '{operator}'."),
            Self::UnknownFunction { name, offset } => write!(f,
                                                             "Invalid expression at position {offset}: Unknown function '{name}'."),
            Self::MalformedNumber { literal, offset } => write!(f,
                                                                "Invalid expression at position {offset}: '{literal}' is not a number."),
            Self::UnexpectedEnd { offset } => write!(f,
                                                     "Invalid expression at position {offset}: Unexpected end of input, an operand is missing."),
        }
    }
}

impl std::error::Error for ParseError {}
