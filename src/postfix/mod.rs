use crate::error::EvalError;
use crate::tokenizer::{is_number, is_word};
use log::debug;

mod converter;
mod evaluator;

pub use converter::to_postfix;
pub use evaluator::evaluate;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Binding strength; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = EvalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(EvalError::UnknownOperator(value.to_string())),
        }
    }
}

/// An infix token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Number(u32),
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// A postfix token. Parentheses never survive conversion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixToken {
    Number(u32),
    Operator(Operator),
}

impl Token {
    /// Classifies a string token. Letter runs that are neither numbers nor
    /// operators carry no arithmetic meaning and yield `None`.
    pub fn classify(lexeme: &str) -> Result<Option<Token>, EvalError> {
        if is_number(lexeme) {
            let value = lexeme.parse().map_err(|_| EvalError::OutOfRange)?;
            return Ok(Some(Token::Number(value)));
        }
        match lexeme {
            "(" => Ok(Some(Token::LeftParen)),
            ")" => Ok(Some(Token::RightParen)),
            _ if is_word(lexeme) => {
                debug!("Dropping unrecognized word: {}", lexeme);
                Ok(None)
            }
            _ => Operator::try_from(lexeme).map(|op| Some(Token::Operator(op))),
        }
    }
}

/// Classifies every string token, dropping filler words.
pub fn classify_all(lexemes: &[&str]) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        if let Some(token) = Token::classify(lexeme)? {
            tokens.push(token);
        }
    }
    Ok(tokens)
}
