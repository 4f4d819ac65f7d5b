use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    postfix::BinaryOperator,
};

impl Context {
    /// Evaluates `left op right`.
    ///
    /// Division fails when the right operand is exactly zero (either sign).
    /// Exponentiation follows `f64::powf`, so negative and fractional
    /// exponents behave as the platform power function defines them.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: The operand pushed first.
    /// - `right`: The operand pushed last.
    /// - `position`: Index of the operator in the postfix sequence, for error
    ///   reporting.
    ///
    /// # Example
    /// ```
    /// use xcalc::{interpreter::evaluator::core::Context, postfix::BinaryOperator};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Subtract, 7.0, 2.0, 2), Ok(5.0));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Power, 2.0, -1.0, 2), Ok(0.5));
    /// assert!(Context::eval_binary(BinaryOperator::Divide, 1.0, 0.0, 2).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Subtract => Ok(left - right),
            BinaryOperator::Multiply => Ok(left * right),
            BinaryOperator::Divide => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(left / right)
            },
            BinaryOperator::Power => Ok(left.powf(right)),
        }
    }
}
