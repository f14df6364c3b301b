use thiserror::Error;

/// Failure raised by one stage of the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Numbers must be between 0 and 20")]
    OutOfRange,

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// Operand count does not resolve to a single value, or nothing to evaluate.
    #[error("Invalid expression")]
    InvalidExpression,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Range,
    Syntax,
    Arithmetic,
    UnknownOperator,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::OutOfRange => ErrorKind::Range,
            EvalError::MismatchedParentheses | EvalError::InvalidExpression => ErrorKind::Syntax,
            EvalError::DivisionByZero => ErrorKind::Arithmetic,
            EvalError::UnknownOperator(_) => ErrorKind::UnknownOperator,
        }
    }
}

/// The only error type handed back to callers of the public entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    #[error("Invalid expression: {0}")]
    Invalid(#[from] EvalError),
}

impl ExpressionError {
    /// The pipeline failure wrapped by this error.
    pub fn reason(&self) -> &EvalError {
        match self {
            ExpressionError::Invalid(reason) => reason,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.reason().kind()
    }
}
