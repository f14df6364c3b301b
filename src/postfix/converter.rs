use super::{Operator, PostfixToken, Token};
use crate::error::EvalError;
use log::debug;

// Entries waiting on the operator stack.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Pending {
    LeftParen,
    Operator(Operator),
}

/// Shunting-yard conversion from infix to postfix order.
///
/// Operators of equal precedence are popped before the incoming one is
/// pushed, so `10 - 3 - 2` becomes `10 3 - 2 -`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<PostfixToken>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(value) => output.push(PostfixToken::Number(value)),
            Token::LeftParen => stack.push(Pending::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Pending::Operator(op)) => output.push(PostfixToken::Operator(op)),
                    Some(Pending::LeftParen) => break,
                    None => return Err(EvalError::MismatchedParentheses),
                }
            },
            Token::Operator(op) => {
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    output.push(PostfixToken::Operator(top));
                    stack.pop();
                }
                stack.push(Pending::Operator(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(PostfixToken::Operator(op)),
            Pending::LeftParen => return Err(EvalError::MismatchedParentheses),
        }
    }

    debug!("Postfix: {:?}", output);
    Ok(output)
}
