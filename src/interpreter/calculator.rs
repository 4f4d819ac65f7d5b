use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    error::{CalcResult, RuntimeError},
    interpreter::{
        converter::convert,
        evaluator::core::{Context, EvalResult},
        validator::validate,
    },
    postfix::Postfix,
};

/// Supplies the value of `x` when an expression needs one.
///
/// The calculator only asks after validation succeeds and only if the
/// expression actually contains `x`.
pub trait VariableSource {
    /// Produces the value to substitute for `x`.
    ///
    /// # Errors
    /// Returns `RuntimeError::VariableUnavailable` if no value can be
    /// produced.
    fn value_of_x(&mut self) -> EvalResult<f64>;
}

/// A fixed value.
impl VariableSource for f64 {
    fn value_of_x(&mut self) -> EvalResult<f64> {
        Ok(*self)
    }
}

/// A value that may be missing; `None` fails whenever `x` is needed.
impl VariableSource for Option<f64> {
    fn value_of_x(&mut self) -> EvalResult<f64> {
        self.ok_or_else(|| RuntimeError::VariableUnavailable { details: "no value was supplied".to_string() })
    }
}

impl<S: VariableSource + ?Sized> VariableSource for &mut S {
    fn value_of_x(&mut self) -> EvalResult<f64> {
        (**self).value_of_x()
    }
}

/// Asks for `x` interactively.
///
/// Writes `Enter x=` to the writer and parses the next line of the reader as
/// a number.
///
/// # Example
/// ```
/// use xcalc::{Prompt, VariableSource};
///
/// let mut out = Vec::new();
/// let mut prompt = Prompt::new("2.5\n".as_bytes(), &mut out);
///
/// assert_eq!(prompt.value_of_x(), Ok(2.5));
/// drop(prompt);
/// assert_eq!(out, b"Enter x=");
/// ```
#[derive(Debug)]
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl Prompt<StdinLock<'static>, Stdout> {
    /// A prompt on the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> VariableSource for Prompt<R, W> {
    fn value_of_x(&mut self) -> EvalResult<f64> {
        let unavailable = |details: String| RuntimeError::VariableUnavailable { details };

        write!(self.writer, "Enter x=").and_then(|()| self.writer.flush())
                                       .map_err(|e| unavailable(e.to_string()))?;

        let mut line = String::new();
        let read = self.reader
                       .read_line(&mut line)
                       .map_err(|e| unavailable(e.to_string()))?;
        if read == 0 {
            return Err(unavailable("input ended before a value was entered".to_string()));
        }

        let input = line.trim();
        input.parse()
             .map_err(|_| unavailable(format!("'{input}' is not a number")))
    }
}

/// Callback receiving the postfix form of each evaluated expression.
type PostfixObserver = Box<dyn FnMut(&Postfix)>;

/// Validates, converts and evaluates expressions.
///
/// Each call to [`Calculator::calculate`] is independent: the only state kept
/// between calls is the variable source and the optional postfix observer.
///
/// # Example
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use xcalc::Calculator;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let log = Rc::clone(&seen);
/// let mut calculator =
///     Calculator::new(5.0).on_postfix(move |postfix| log.borrow_mut().push(postfix.to_string()));
///
/// assert_eq!(calculator.calculate("x * 2 + 1"), Ok(11.0));
/// assert_eq!(calculator.calculate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(*seen.borrow(), ["x 2 * 1 +", "2 3 + 4 *"]);
/// ```
pub struct Calculator<S> {
    source:   S,
    observer: Option<PostfixObserver>,
}

impl<S: VariableSource> Calculator<S> {
    /// Creates a calculator that asks `source` for `x` when needed.
    pub const fn new(source: S) -> Self {
        Self { source,
               observer: None }
    }

    /// Registers a callback that sees the postfix sequence of every
    /// expression that passes validation, before it is evaluated.
    #[must_use]
    pub fn on_postfix(mut self, observer: impl FnMut(&Postfix) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Computes the value of an expression.
    ///
    /// The expression is validated first; if it references `x`, the variable
    /// source is asked for a value; then it is converted to postfix, which is
    /// logged at `debug` level and handed to the observer, and evaluated.
    ///
    /// # Errors
    /// Returns a [`CalculatorError`](crate::error::CalculatorError) on the
    /// first failure. No work is done after a failed step.
    pub fn calculate(&mut self, expression: &str) -> CalcResult<f64> {
        let presence = validate(expression)?;

        let variable = if presence.is_present() {
            log::info!("Expression references x, requesting a value");
            Some(self.source.value_of_x()?)
        } else {
            None
        };

        let postfix = convert(expression);
        log::debug!("Postfix: {postfix}");
        if let Some(observer) = self.observer.as_mut() {
            observer(&postfix);
        }

        Ok(Context::new(variable).evaluate(postfix)?)
    }
}
