use std::fmt;

use ordered_float::OrderedFloat;

/// Represents a binary arithmetic operator.
///
/// Every operator is left-associative, including `^`: `2^3^2` is read as
/// `(2^3)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator.
    ///
    /// `+` and `-` bind weakest (1), `*` and `/` bind tighter (2), and `^`
    /// binds tightest (3).
    ///
    /// # Example
    /// ```
    /// use xcalc::postfix::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Multiply.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Add.precedence(), BinaryOperator::Subtract.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Power => 3,
        }
    }

    /// The character the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

/// Defines the built-in functions by generating the `Function` enum together
/// with its name table.
///
/// Each entry provides the enum variant and the exact, case-sensitive name
/// the function is called by in an expression. The macro produces:
/// - `Function` (one variant per entry),
/// - `FUNCTION_NAMES` (public list of recognized names),
/// - `Function::from_name` and `Function::name`.
macro_rules! builtin_functions {
    (
        $(
            $(#[$doc:meta])*
            $variant:ident => $name:literal
        ),* $(,)?
    ) => {
        /// A built-in function taking exactly one argument.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $(
                $(#[$doc])*
                $variant,
            )*
        }

        /// Names of all built-in functions, in declaration order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];

        impl Function {
            /// Looks up a built-in function by its exact name.
            ///
            /// # Example
            /// ```
            /// use xcalc::postfix::Function;
            ///
            /// assert_eq!(Function::from_name("ctg"), Some(Function::Ctg));
            /// assert_eq!(Function::from_name("tan"), None);
            /// assert_eq!(Function::from_name("Sin"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The name the function is called by.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

builtin_functions! {
    /// Sine.
    Sin => "sin",
    /// Cosine.
    Cos => "cos",
    /// Tangent.
    Tg  => "tg",
    /// Cotangent, computed as the reciprocal of the tangent.
    Ctg => "ctg",
    /// Natural exponential.
    Exp => "exp",
}

/// A single element of a postfix sequence.
///
/// Tokens are produced by the converter and consumed by the evaluator; they
/// never change after being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    /// A numeric literal.
    Number(OrderedFloat<f64>),
    /// The free variable `x`.
    Variable,
    /// A binary operator applied to the two preceding operands.
    Binary(BinaryOperator),
    /// Negation of the preceding operand.
    UnaryMinus,
    /// A built-in function applied to the preceding operand.
    Function(Function),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "x"),
            Self::Binary(op) => write!(f, "{}", op.symbol()),
            Self::UnaryMinus => write!(f, "u-"),
            Self::Function(function) => write!(f, "{}", function.name()),
        }
    }
}

/// An expression in postfix order.
///
/// Rendered with `Display`, the sequence becomes a space-separated token list
/// such as `2 3 4 * +`, which is what the calculator reports as its postfix
/// diagnostic.
///
/// # Example
/// ```
/// use xcalc::interpreter::converter::convert;
///
/// let postfix = convert("-(1 + x) * sin(2)");
/// assert_eq!(postfix.to_string(), "1 x + u- 2 sin *");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    /// The tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    /// Number of tokens in the sequence.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence holds no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<PostfixToken>> for Postfix {
    fn from(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }
}

impl IntoIterator for Postfix {
    type IntoIter = std::vec::IntoIter<PostfixToken>;
    type Item = PostfixToken;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
