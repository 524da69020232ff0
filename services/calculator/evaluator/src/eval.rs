use log::debug;

use crate::error::{ErrorKind, EvalError};
use crate::postfix::to_postfix;
use crate::token::{Postfix, Token};

/// Evaluates an infix arithmetic expression
///
/// Supports `+`, `-`, `*`, `/`, parentheses and decimal numbers.
/// An empty expression evaluates to `0.0`
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    if expression.is_empty() {
        return Ok(0.0);
    }

    let result = to_postfix(expression).and_then(|postfix| evaluate_postfix(&postfix));
    if let Err(e) = &result {
        debug!("failed to evaluate \"{}\": {}", expression, e);
    }
    Ok(result?)
}

pub fn evaluate_postfix(postfix: &Postfix<'_>) -> Result<f64, ErrorKind> {
    let mut values: Vec<f64> = Vec::new();

    for token in postfix.tokens() {
        match *token {
            Token::Operator(op) => {
                let (b, a) = match (values.pop(), values.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => return Err(ErrorKind::InsufficientOperands),
                };
                values.push(op.apply(a, b)?);
            }
            Token::Number(lexeme) => {
                let value = lexeme
                    .parse()
                    .map_err(|_| ErrorKind::InvalidNumber(lexeme.to_string()))?;
                values.push(value);
            }
            Token::LeftParen | Token::RightParen => return Err(ErrorKind::MismatchedParentheses),
        }
    }

    match values.len() {
        0 => Err(ErrorKind::InsufficientOperands),
        1 => Ok(values[0]),
        _ => Err(ErrorKind::TooManyOperands),
    }
}
