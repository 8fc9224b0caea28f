use log::debug;
use word_counter_domain::calculator::{CalculatorInput, parse_line};
use word_counter_shared_kernel::Result;

use crate::dto::CalculatorOutcome;

/// Evaluates calculator prompt lines; every error leaves the session usable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate_line(&self, line: &str) -> Result<CalculatorOutcome> {
        match parse_line(line)? {
            CalculatorInput::Exit => Ok(CalculatorOutcome::Exit),
            CalculatorInput::Evaluate(expr) => {
                let value = expr.evaluate()?;
                debug!("{} {} {} = {value}", expr.lhs, expr.op, expr.rhs);
                Ok(CalculatorOutcome::Value(value))
            }
        }
    }
}
