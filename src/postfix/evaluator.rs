use super::PostfixToken;
use crate::error::EvalError;

/// Evaluates a postfix sequence on a value stack.
pub fn evaluate(postfix: &[PostfixToken]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            PostfixToken::Number(value) => stack.push(f64::from(*value)),
            PostfixToken::Operator(op) => {
                if stack.len() < 2 {
                    return Err(EvalError::InvalidExpression);
                }
                let (b, a) = (pop(&mut stack)?, pop(&mut stack)?);
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::InvalidExpression),
    }
}

fn pop(stack: &mut Vec<f64>) -> Result<f64, EvalError> {
    stack.pop().ok_or(EvalError::InvalidExpression)
}
