use crate::error::{EvalError, ExpressionError};
use crate::normalizer::normalize;
use crate::postfix::{self, PostfixToken};
use crate::tokenizer::tokenize;
use crate::validator::validate;
use log::debug;
use lru::LruCache;
use rayon::prelude::*;
use std::num::NonZeroUsize;

/// A validated expression in postfix order, ready to run any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    normalized: String,
    postfix: Vec<PostfixToken>,
}

impl Program {
    /// Normalizes and compiles free-form text.
    pub fn compile(expression: &str) -> Result<Self, ExpressionError> {
        Ok(Self::build(normalize(expression))?)
    }

    /// Compiles text that has already been through [`normalize`].
    pub fn from_normalized(normalized: String) -> Result<Self, ExpressionError> {
        Ok(Self::build(normalized)?)
    }

    pub fn run(&self) -> Result<f64, ExpressionError> {
        Ok(self.evaluate()?)
    }

    pub(crate) fn build(normalized: String) -> Result<Self, EvalError> {
        let lexemes = tokenize(&normalized)?;
        if !validate(&lexemes) {
            return Err(EvalError::OutOfRange);
        }
        let tokens = postfix::classify_all(&lexemes)?;
        let postfix = postfix::to_postfix(&tokens)?;

        Ok(Self {
            normalized,
            postfix,
        })
    }

    pub(crate) fn evaluate(&self) -> Result<f64, EvalError> {
        postfix::evaluate(&self.postfix)
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn postfix(&self) -> &[PostfixToken] {
        &self.postfix
    }
}

/// Evaluator that memoizes compiled programs by their normalized text.
pub struct Evaluator {
    cache: Option<LruCache<String, Program>>,
}

impl Evaluator {
    /// Creates a new `Evaluator` with a given maximum cache size. A size of
    /// zero disables caching.
    pub fn new(max_cache_size: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(max_cache_size).map(LruCache::new),
        }
    }

    /// Compiles an expression, reusing a cached program when one exists.
    /// Compilation failures are never cached.
    pub fn compile(&mut self, expression: &str) -> Result<Program, ExpressionError> {
        let normalized = normalize(expression);

        if let Some(program) = self.cache.as_mut().and_then(|cache| cache.get(&normalized)) {
            debug!("Cache hit: {}", normalized);
            return Ok(program.clone());
        }

        debug!("Cache miss: {}", normalized);
        let program = Program::build(normalized)?;
        if let Some(cache) = self.cache.as_mut() {
            cache.put(program.normalized.clone(), program.clone());
        }
        Ok(program)
    }

    /// Runs a compiled program.
    pub fn execute(&self, program: &Program) -> Result<f64, ExpressionError> {
        program.run()
    }

    /// Compiles (through the cache) and runs an expression.
    pub fn evaluate_expression(&mut self, expression: &str) -> Result<f64, ExpressionError> {
        let program = self.compile(expression)?;
        self.execute(&program)
    }

    /// Number of cached programs.
    pub fn cached(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.len())
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Evaluates independent expressions in parallel. Results keep input order.
pub fn evaluate_batch<S>(expressions: &[S]) -> Vec<Result<f64, ExpressionError>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| crate::evaluate_expression(expression.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::postfix::Operator;

    #[test]
    fn test_compile_program() {
        let program = Program::compile("six plus three").unwrap();
        assert_eq!(program.normalized(), "6 + 3");
        assert_eq!(
            program.postfix(),
            &[
                PostfixToken::Number(6),
                PostfixToken::Number(3),
                PostfixToken::Operator(Operator::Add)
            ]
        );
        assert_eq!(program.run(), Ok(9.0));
    }

    #[test]
    fn test_compile_rejects_out_of_range() {
        assert_eq!(Program::build("21 + 1".to_string()), Err(EvalError::OutOfRange));
    }

    #[test]
    fn test_range_checked_before_parentheses() {
        assert_eq!(Program::build("(25".to_string()), Err(EvalError::OutOfRange));
    }

    #[test]
    fn test_runtime_errors_surface_on_run() {
        let program = Program::compile("5/0").unwrap();
        assert_eq!(program.evaluate(), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_program_errors_carry_outward_prefix() {
        let err = Program::compile("25+1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid expression: Numbers must be between 0 and 20"
        );

        let err = Program::from_normalized("(1 + 2".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid expression: Mismatched parentheses");

        let err = Program::compile("5/0").unwrap().run().unwrap_err();
        assert_eq!(err.to_string(), "Invalid expression: Division by zero");
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
    }

    #[test]
    fn test_cache_reuse() {
        let mut evaluator = Evaluator::new(10);
        assert_eq!(evaluator.evaluate_expression("1 + 2"), Ok(3.0));
        assert_eq!(evaluator.evaluate_expression("1 PLUS 2"), Ok(3.0));
        assert_eq!(evaluator.evaluate_expression("one plus two"), Ok(3.0));
        // All three normalize to "1 + 2".
        assert_eq!(evaluator.cached(), 1);

        evaluator.clear_cache();
        assert_eq!(evaluator.cached(), 0);
    }

    #[test]
    fn test_cache_eviction() {
        let mut evaluator = Evaluator::new(2);
        for expression in ["1+1", "2+2", "3+3"] {
            evaluator.evaluate_expression(expression).unwrap();
        }
        assert_eq!(evaluator.cached(), 2);
    }

    #[test]
    fn test_cache_disabled() {
        let mut evaluator = Evaluator::new(0);
        assert_eq!(evaluator.evaluate_expression("4 * 5"), Ok(20.0));
        assert_eq!(evaluator.cached(), 0);
    }

    #[test]
    fn test_failed_compilation_not_cached() {
        let mut evaluator = Evaluator::new(10);
        let err = evaluator.evaluate_expression("(1+2").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(evaluator.cached(), 0);
    }

    #[test]
    fn test_runtime_failure_is_repeatable_from_cache() {
        let mut evaluator = Evaluator::new(10);
        for _ in 0..2 {
            let err = evaluator.evaluate_expression("5/0").unwrap_err();
            assert_eq!(err.to_string(), "Invalid expression: Division by zero");
        }
        assert_eq!(evaluator.cached(), 1);
    }

    #[test]
    fn test_precompiled_program() {
        let mut evaluator = Evaluator::default();
        let program = evaluator.compile("12 plus (10 divided by 2)").unwrap();
        for _ in 0..3 {
            assert_eq!(evaluator.execute(&program), Ok(17.0));
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let expressions = ["19+19", "5/0", "six plus three", "25+1", "(1+2"];
        let results = evaluate_batch(&expressions);

        assert_eq!(results.len(), expressions.len());
        assert_eq!(results[0], Ok(38.0));
        assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::Arithmetic);
        assert_eq!(results[2], Ok(9.0));
        assert_eq!(results[3].as_ref().unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(results[4].as_ref().unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_batch_owned_strings() {
        let expressions: Vec<String> = (0..=20).map(|i| format!("{i} * 2")).collect();
        let results = evaluate_batch(&expressions);
        for (i, result) in results.into_iter().enumerate() {
            assert_eq!(result, Ok(i as f64 * 2.0));
        }
    }
}
