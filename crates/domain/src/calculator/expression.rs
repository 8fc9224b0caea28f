use std::fmt;

use word_counter_shared_kernel::{DomainError, DomainResult};

/// Arithmetic operators, in the order the parser scans for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const SCAN_ORDER: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        Self::SCAN_ORDER.into_iter().find(|op| {
            let mut chars = s.chars();
            chars.next() == Some(op.symbol()) && chars.next().is_none()
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// `lhs op rhs`, ready to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

impl Expression {
    pub fn new(lhs: f64, op: Operator, rhs: f64) -> Self {
        Self { lhs, op, rhs }
    }

    pub fn evaluate(&self) -> DomainResult<f64> {
        match self.op {
            Operator::Add => Ok(self.lhs + self.rhs),
            Operator::Sub => Ok(self.lhs - self.rhs),
            Operator::Mul => Ok(self.lhs * self.rhs),
            Operator::Div if self.rhs == 0.0 => Err(DomainError::DivisionByZero),
            Operator::Div => Ok(self.lhs / self.rhs),
        }
    }
}
