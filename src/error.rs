/// Parsing errors.
///
/// Defines every reason the validator can reject an expression before any
/// conversion or evaluation work happens: bracket mismatches, misplaced
/// operators, unknown function names and malformed literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while a postfix sequence is evaluated, such as
/// division by zero or an inconsistent operand stack, plus failures to obtain
/// a value for the variable.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type returned by the calculator entry points.
pub type CalcResult<T> = Result<T, CalculatorError>;

/// Coarse classification of a failed calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The expression was rejected by the validator.
    InvalidExpression,
    /// A `/` had a right operand of exactly zero.
    DivisionByZero,
    /// The operand stack did not end with exactly one value.
    CalculationError,
    /// No value could be obtained for `x`.
    VariableUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way a single `calculate` call can fail.
pub enum CalculatorError {
    /// Validation failed.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl CalculatorError {
    /// Classifies the failure.
    ///
    /// # Example
    /// ```
    /// use xcalc::{ErrorKind, calculate};
    ///
    /// let err = calculate("4 / 0", None).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    ///
    /// let err = calculate("foo(1)", None).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidExpression);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::InvalidExpression,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::MissingOperand { .. }
                          | RuntimeError::CalculationError { .. }) => ErrorKind::CalculationError,
            Self::Runtime(RuntimeError::VariableUnavailable { .. }) => {
                ErrorKind::VariableUnavailable
            },
        }
    }
}

impl std::fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalculatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalculatorError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for CalculatorError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}
