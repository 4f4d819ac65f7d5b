use crate::postfix::Function;

impl Function {
    /// Applies the function to its argument.
    ///
    /// `ctg` is the reciprocal of the tangent with no special case, so
    /// `ctg(0)` is positive infinity rather than an error.
    ///
    /// # Example
    /// ```
    /// use xcalc::postfix::Function;
    ///
    /// assert_eq!(Function::Exp.apply(0.0), 1.0);
    /// assert_eq!(Function::Ctg.apply(0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Tg => argument.tan(),
            Self::Ctg => argument.tan().recip(),
            Self::Exp => argument.exp(),
        }
    }
}
