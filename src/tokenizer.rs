use crate::error::EvalError;
use log::debug;
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "./expression.pest"]
pub struct TokenParser;

/// Splits a normalized expression into string tokens.
///
/// Digit runs and letter runs are single tokens, every operator and
/// parenthesis is its own token, and whitespace only separates.
pub fn tokenize(normalized: &str) -> Result<Vec<&str>, EvalError> {
    let tokens = TokenParser::parse(Rule::tokens, normalized)
        .map_err(|e| {
            debug!("Tokenize error: {}", e);
            EvalError::InvalidExpression
        })?
        .next()
        .ok_or(EvalError::InvalidExpression)?;

    let tokens: Vec<&str> = tokens
        .into_inner()
        .filter(|pair| pair.as_rule() != Rule::EOI)
        .map(|pair| pair.as_str())
        .collect();

    debug!("Tokens: {:?}", tokens);
    Ok(tokens)
}

pub(crate) fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn is_word(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase())
}
