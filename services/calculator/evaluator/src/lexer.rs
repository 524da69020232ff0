use std::str::FromStr;

use nom::IResult;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::pair,
};

use crate::error::ErrorKind;
use crate::token::{Operator, Token};

// ASCII whitespace and vertical tab
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// "12", "12." and "12.5" or ".5"
fn decimal(i: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(i)
}

/// Returns true if `lexeme` has at least one digit, at most one decimal point and nothing else
pub fn is_valid_number(lexeme: &str) -> bool {
    all_consuming(decimal)(lexeme).is_ok()
}

fn operator(i: &str) -> IResult<&str, Operator> {
    map_res(one_of("+-*/"), |c: char| {
        Operator::from_str(c.encode_utf8(&mut [0; 4]))
    })(i)
}

fn token(i: &str) -> IResult<&str, Token<'_>> {
    alt((
        // The whole run of digits and dots is taken before validation
        map(take_while1(is_number_char), Token::Number),
        map(operator, Token::Operator),
        map(char('('), |_| Token::LeftParen),
        map(char(')'), |_| Token::RightParen),
    ))(i)
}

/// Splits an infix expression into tokens, skipping whitespace
///
/// Stops after yielding the first error
pub struct Lexer<'a> {
    remaining: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer { remaining: input }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.remaining.trim_start_matches(is_space);
        let first = input.chars().next()?;

        match token(input) {
            Ok((_, Token::Number(lexeme))) if !is_valid_number(lexeme) => {
                self.remaining = "";
                Some(Err(ErrorKind::InvalidNumber(lexeme.to_string())))
            }
            Ok((rest, token)) => {
                self.remaining = rest;
                Some(Ok(token))
            }
            Err(_) => {
                self.remaining = "";
                Some(Err(ErrorKind::InvalidCharacter(first)))
            }
        }
    }
}
