use log::trace;

use crate::error::ErrorKind;
use crate::lexer::Lexer;
use crate::token::{Postfix, Token};

/// Converts an infix expression to postfix order using the shunting-yard algorithm
///
/// Operators of equal precedence associate to the left
pub fn to_postfix(expression: &str) -> Result<Postfix<'_>, ErrorKind> {
    let mut output = Vec::new();
    // Only ever holds operators and left parentheses
    let mut stack: Vec<Token<'_>> = Vec::new();

    for token in Lexer::new(expression) {
        match token? {
            token @ Token::Number(_) => output.push(token),
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(token) => output.push(token),
                    None => return Err(ErrorKind::MismatchedParentheses),
                }
            },
            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(Token::Operator(op));
            }
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LeftParen {
            return Err(ErrorKind::MismatchedParentheses);
        }
        output.push(token);
    }

    let postfix = Postfix(output);
    trace!("converted \"{}\" to \"{}\"", expression, postfix);
    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rpn(expression: &str) -> Result<String, ErrorKind> {
        to_postfix(expression).map(|p| p.to_string())
    }

    #[test]
    fn test_precedence() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(rpn("1+2*3")?, "1 2 3 * +");
        assert_eq!(rpn("3*2+3")?, "3 2 * 3 +");
        assert_eq!(rpn("10-6/2")?, "10 6 2 / -");
        Ok(())
    }

    #[test]
    fn test_left_associative() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(rpn("8-4-2")?, "8 4 - 2 -");
        assert_eq!(rpn("8/4*2")?, "8 4 / 2 *");
        assert_eq!(rpn("1-2+3")?, "1 2 - 3 +");
        Ok(())
    }

    #[test]
    fn test_parentheses() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(rpn("(1+2)*3")?, "1 2 + 3 *");
        assert_eq!(rpn("((1+1))")?, "1 1 +");
        assert_eq!(rpn("2*(3-(4+5))/6")?, "2 3 4 5 + - * 6 /");
        assert_eq!(rpn(" ( 2 + 3 ) * 2")?, "2 3 + 2 *");
        Ok(())
    }

    #[test]
    fn test_structure_not_checked() -> Result<(), Box<dyn std::error::Error>> {
        // Conversion only orders tokens; operand counts are checked on evaluation
        assert_eq!(rpn("2+")?, "2 +");
        assert_eq!(rpn("2 3")?, "2 3");
        assert_eq!(rpn("*3")?, "3 *");
        assert!(to_postfix("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_mismatched_parentheses() {
        assert_eq!(rpn("(2+3"), Err(ErrorKind::MismatchedParentheses));
        assert_eq!(rpn("2+3)"), Err(ErrorKind::MismatchedParentheses));
        assert_eq!(rpn("((2+3)"), Err(ErrorKind::MismatchedParentheses));
        assert_eq!(rpn("(2+3))"), Err(ErrorKind::MismatchedParentheses));
        assert_eq!(rpn(")("), Err(ErrorKind::MismatchedParentheses));
    }

    #[test]
    fn test_first_error_wins() {
        // The unmatched ')' is reached before the invalid character
        assert_eq!(rpn("1)+a"), Err(ErrorKind::MismatchedParentheses));
        assert_eq!(rpn("a+1)"), Err(ErrorKind::InvalidCharacter('a')));
        assert_eq!(
            rpn("1.2.3+(4"),
            Err(ErrorKind::InvalidNumber("1.2.3".to_string()))
        );
    }
}
