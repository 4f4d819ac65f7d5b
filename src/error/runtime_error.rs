use crate::postfix::PostfixToken;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Positions are indices into the postfix sequence, not into the source text.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Index of the `/` token.
        position: usize,
    },
    /// A token needed more operands than the stack held.
    MissingOperand {
        /// The token that ran out of operands.
        token:    PostfixToken,
        /// Index of the token.
        position: usize,
    },
    /// The operand stack did not end with exactly one value.
    CalculationError {
        /// Number of values left on the stack.
        remaining: usize,
    },
    /// No value could be obtained for the variable `x`.
    VariableUnavailable {
        /// Why the value is missing.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Division by zero (postfix token {position}).")
            },
            Self::MissingOperand { token, position } => write!(f,
                                                               "Calculation error: '{token}' (postfix token {position}) is missing an operand."),
            Self::CalculationError { remaining } => write!(f,
                                                           "Calculation error: expected exactly one result, found {remaining}."),
            Self::VariableUnavailable { details } => {
                write!(f, "No value for x: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
