use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ErrorKind {
    #[display(fmt = "Invalid character in expression: '{}'", _0)]
    InvalidCharacter(char),

    #[display(fmt = "Invalid number format: \"{}\"", _0)]
    InvalidNumber(String),

    #[display(fmt = "Mismatched parentheses")]
    MismatchedParentheses,

    #[display(fmt = "Invalid expression: insufficient operands")]
    InsufficientOperands,

    #[display(fmt = "Invalid expression: too many operands")]
    TooManyOperands,

    #[display(fmt = "Division by zero")]
    DivisionByZero,
}

impl std::error::Error for ErrorKind {}

/// The single error surfaced by [`evaluate`](crate::evaluate)
#[derive(Debug, Display, Clone, PartialEq)]
#[display(fmt = "Evaluation error: {}", _0)]
pub struct EvalError(ErrorKind);

impl EvalError {
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<ErrorKind> for EvalError {
    fn from(e: ErrorKind) -> Self {
        EvalError(e)
    }
}
