//! Two-operand arithmetic as typed by the user at the calculator prompt.

pub mod expression;
pub mod parser;

pub use expression::{Expression, Operator};
pub use parser::{CalculatorInput, EXIT_KEYWORD, parse_line};
