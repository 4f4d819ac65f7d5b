/// The lexer module tokenizes expressions.
///
/// The lexer reads the raw expression text and produces a stream of tokens:
/// numbers, the variable `x`, function names, operators and parentheses.
/// Whitespace is skipped. Characters it does not recognize are reported
/// in place instead of aborting the scan.
///
/// # Responsibilities
/// - Collects maximal digit and letter runs and classifies them.
/// - Attaches source offsets for error reporting.
pub mod lexer;
/// The validator module rejects malformed expressions.
///
/// It checks parenthesis balance, operator placement and function names in a
/// single left-to-right pass, and reports whether the expression uses `x`.
pub mod validator;
/// The converter module turns infix expressions into postfix sequences.
///
/// This is the shunting-yard algorithm: operands are emitted immediately,
/// operators wait on a stack until precedence or a closing parenthesis
/// releases them.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// # Responsibilities
/// - Runs the operand stack over the sequence.
/// - Applies binary operators, unary minus and built-in functions.
/// - Reports division by zero and stack inconsistencies.
pub mod evaluator;
/// The calculator module ties all phases together.
///
/// It exposes [`Calculator`](calculator::Calculator), which validates,
/// requests `x` from a [`VariableSource`](calculator::VariableSource),
/// converts and evaluates, and offers the postfix form as a diagnostic.
pub mod calculator;
