//! Arithmetic expression evaluation for the calculator service
//!
//! An expression is converted to postfix order with the shunting-yard algorithm and then
//! folded over an operand stack. Only `+`, `-`, `*`, `/`, parentheses and unsigned decimal
//! numbers are recognised.
//!
//! ```
//! assert_eq!(evaluator::evaluate("(1 + 2) * 3").unwrap(), 9.0);
//! assert!(evaluator::evaluate("5 / 0").is_err());
//! ```

pub use error::{ErrorKind, EvalError};
pub use eval::{evaluate, evaluate_postfix};
pub use format::{format_significant, DEFAULT_PRECISION};
pub use lexer::{is_valid_number, Lexer};
pub use postfix::to_postfix;
pub use token::{Operator, Postfix, Token};

mod error;
mod eval;
mod format;
mod lexer;
mod postfix;
mod token;
