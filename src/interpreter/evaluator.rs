/// Core evaluation logic and context management.
///
/// Contains the evaluation loop over a postfix sequence, the operand stack
/// and the per-call evaluation context.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^` on two operands, including the division-by-zero
/// check.
pub mod binary;

/// Built-in function evaluation.
///
/// Applies `sin`, `cos`, `tg`, `ctg` and `exp` to a single argument.
pub mod function;
