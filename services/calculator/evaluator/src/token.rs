use std::fmt;

use strum_macros::{AsRefStr, EnumString};

use crate::error::ErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
pub enum Operator {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
}

impl Operator {
    /// Higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, ErrorKind> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div if b == 0.0 => Err(ErrorKind::DivisionByZero),
            Operator::Div => Ok(a / b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Number(&'a str),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl<'a> fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(lexeme) => f.write_str(lexeme),
            Token::Operator(op) => f.write_str(op.as_ref()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Number and operator tokens in reverse polish order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix<'a>(pub(crate) Vec<Token<'a>>);

impl<'a> Postfix<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> fmt::Display for Postfix<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.0.iter().enumerate() {
            if idx != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}
