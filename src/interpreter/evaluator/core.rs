use crate::{
    error::RuntimeError,
    postfix::{Postfix, PostfixToken},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the evaluation context of a single calculation.
///
/// The context holds the value of the free variable `x`, or `None` when the
/// expression does not reference it. A context is built for one call and
/// never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Context {
    /// Value substituted for `x`.
    pub variable: Option<f64>,
}

impl Context {
    /// Creates a context for an expression that uses `x`, or not.
    #[must_use]
    pub const fn new(variable: Option<f64>) -> Self {
        Self { variable }
    }

    /// Evaluates a postfix sequence and returns its single result.
    ///
    /// Numbers and `x` are pushed onto an operand stack. Operators and
    /// functions pop their operands (the right operand of a binary operator
    /// comes off first) and push the result.
    ///
    /// # Errors
    /// - `DivisionByZero` when a `/` has a right operand of zero.
    /// - `MissingOperand` when a token finds too few operands.
    /// - `CalculationError` when the stack does not end with exactly one
    ///   value.
    /// - `VariableUnavailable` when `x` occurs but the context has no value.
    ///
    /// # Example
    /// ```
    /// use xcalc::interpreter::{converter::convert, evaluator::core::Context};
    ///
    /// let context = Context::new(Some(5.0));
    /// assert_eq!(context.evaluate(convert("x * 2 + 1")), Ok(11.0));
    /// ```
    pub fn evaluate(&self, postfix: Postfix) -> EvalResult<f64> {
        let mut operands = OperandStack::default();

        for (position, token) in postfix.into_iter().enumerate() {
            let value = match token {
                PostfixToken::Number(value) => value.into_inner(),
                PostfixToken::Variable => self.variable_value()?,
                PostfixToken::Binary(op) => {
                    let right = operands.pop(token, position)?;
                    let left = operands.pop(token, position)?;
                    Self::eval_binary(op, left, right, position)?
                },
                PostfixToken::UnaryMinus => -operands.pop(token, position)?,
                PostfixToken::Function(function) => function.apply(operands.pop(token, position)?),
            };
            log::trace!("{token} -> {value}");
            operands.push(value);
        }

        operands.into_result()
    }

    fn variable_value(&self) -> EvalResult<f64> {
        self.variable
            .ok_or_else(|| RuntimeError::VariableUnavailable { details: "the expression was evaluated without one".to_string() })
    }
}

/// Evaluates a postfix sequence with `x` bound to `variable`.
///
/// # Errors
/// See [`Context::evaluate`].
///
/// # Example
/// ```
/// use xcalc::{
///     error::RuntimeError,
///     interpreter::{converter::convert, evaluator::core::evaluate},
/// };
///
/// assert_eq!(evaluate(convert("2^3^2"), 0.0), Ok(64.0));
/// assert_eq!(evaluate(convert("4/0"), 0.0), Err(RuntimeError::DivisionByZero { position: 2 }));
/// ```
pub fn evaluate(postfix: Postfix, variable: f64) -> EvalResult<f64> {
    Context::new(Some(variable)).evaluate(postfix)
}

/// Last-in-first-out stack of intermediate values.
#[derive(Debug, Default)]
struct OperandStack(Vec<f64>);

impl OperandStack {
    fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    fn pop(&mut self, token: PostfixToken, position: usize) -> EvalResult<f64> {
        self.0
            .pop()
            .ok_or(RuntimeError::MissingOperand { token, position })
    }

    fn into_result(self) -> EvalResult<f64> {
        match self.0.as_slice() {
            [value] => Ok(*value),
            values => Err(RuntimeError::CalculationError { remaining: values.len() }),
        }
    }
}
