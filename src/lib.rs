pub mod engine;
pub mod error;
pub mod normalizer;
pub mod postfix;
pub mod tokenizer;
pub mod validator;

pub use engine::{evaluate_batch, Evaluator, Program};
pub use error::{ErrorKind, EvalError, ExpressionError};

/// Evaluates a free-form arithmetic expression such as `"six plus three"`.
///
/// Every pipeline failure is reported as an [`ExpressionError`] whose message
/// reads `Invalid expression: <reason>`.
pub fn evaluate_expression(expression: &str) -> Result<f64, ExpressionError> {
    Program::compile(expression)?.run()
}
