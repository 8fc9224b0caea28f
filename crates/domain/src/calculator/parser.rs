use word_counter_shared_kernel::{DomainError, DomainResult};

use crate::calculator::{Expression, Operator};

/// Word that ends a calculator session, matched case-insensitively.
pub const EXIT_KEYWORD: &str = "sair";

/// One line of calculator input, after interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorInput {
    Exit,
    Evaluate(Expression),
}

/// Interpret a line typed at the calculator prompt.
///
/// Accepts `a op b` with or without spaces and a comma as decimal separator.
/// Without exactly three whitespace-separated parts, the first of `+ - * /`
/// present in the line splits it and must leave exactly two operands.
pub fn parse_line(line: &str) -> DomainResult<CalculatorInput> {
    let input = line.trim();
    if input.to_lowercase() == EXIT_KEYWORD {
        return Ok(CalculatorInput::Exit);
    }

    let normalized = input.replace(',', ".");
    let parts: Vec<&str> = normalized.split_whitespace().collect();

    let expression = if let [lhs, op, rhs] = parts.as_slice() {
        let (lhs, rhs) = (parse_operand(input, lhs)?, parse_operand(input, rhs)?);
        let op = Operator::from_symbol(op)
            .ok_or_else(|| DomainError::InvalidOperator { operator: (*op).to_owned() })?;
        Expression::new(lhs, op, rhs)
    } else {
        split_on_operator(input, &normalized)?
    };

    Ok(CalculatorInput::Evaluate(expression))
}

fn split_on_operator(input: &str, normalized: &str) -> DomainResult<Expression> {
    let op = Operator::SCAN_ORDER
        .into_iter()
        .find(|op| normalized.contains(op.symbol()))
        .ok_or_else(|| DomainError::MissingOperator { input: input.to_owned() })?;

    let pieces: Vec<&str> = normalized.split(op.symbol()).collect();
    let [lhs, rhs] = pieces.as_slice() else {
        return Err(DomainError::malformed(
            input,
            format!("expected two operands around '{op}', found {}", pieces.len()),
        ));
    };

    Ok(Expression::new(parse_operand(input, lhs)?, op, parse_operand(input, rhs)?))
}

fn parse_operand(input: &str, raw: &str) -> DomainResult<f64> {
    let raw = raw.trim();
    raw.parse::<f64>()
        .map_err(|_| DomainError::malformed(input, format!("'{raw}' is not a number")))
}

#[cfg(test)]
mod tests {
    use word_counter_shared_kernel::ErrorKind;

    use super::*;

    fn eval(line: &str) -> DomainResult<f64> {
        match parse_line(line)? {
            CalculatorInput::Evaluate(expr) => expr.evaluate(),
            CalculatorInput::Exit => panic!("unexpected exit for {line:?}"),
        }
    }

    fn kind(line: &str) -> ErrorKind {
        eval(line).unwrap_err().kind()
    }

    #[test]
    fn spaced_expression() {
        assert_eq!(eval("2 + 3").unwrap(), 5.0);
        assert_eq!(eval("  7 * 6 ").unwrap(), 42.0);
    }

    #[test]
    fn compact_expression() {
        assert_eq!(eval("4*5").unwrap(), 20.0);
        assert_eq!(eval("10 /2").unwrap(), 5.0);
        assert_eq!(eval("2 +3").unwrap(), 5.0);
    }

    #[test]
    fn comma_decimal_separator() {
        assert_eq!(eval("1,5 + 1,5").unwrap(), 3.0);
        assert_eq!(eval("2,5*2").unwrap(), 5.0);
    }

    #[test]
    fn exit_keyword_any_case() {
        assert_eq!(parse_line("sair").unwrap(), CalculatorInput::Exit);
        assert_eq!(parse_line("  SAIR ").unwrap(), CalculatorInput::Exit);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(kind("10/0"), ErrorKind::DivisionByZero);
        assert_eq!(kind("10 / 0,0"), ErrorKind::DivisionByZero);
    }

    #[test]
    fn leading_negative_with_plus_splits_on_plus() {
        assert_eq!(eval("-2+3").unwrap(), 1.0);
        assert_eq!(eval("-2 + 3").unwrap(), 1.0);
    }

    #[test]
    fn leading_negative_with_minus_is_malformed() {
        assert_eq!(kind("-2-3"), ErrorKind::MalformedExpression);
    }

    #[test]
    fn first_operator_in_scan_order_wins() {
        // '-' is scanned before '*', so "3*-2" splits on '-' into "3*" and "2".
        assert_eq!(kind("3*-2"), ErrorKind::MalformedExpression);
        assert_eq!(eval("6/-2").unwrap_err().kind(), ErrorKind::MalformedExpression);
    }

    #[test]
    fn unknown_operator_between_numbers() {
        assert_eq!(kind("2 x 3"), ErrorKind::InvalidOperator);
    }

    #[test]
    fn operands_checked_before_operator() {
        assert_eq!(kind("a x 3"), ErrorKind::MalformedExpression);
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(kind("5+"), ErrorKind::MalformedExpression);
        assert_eq!(kind("1+2+3"), ErrorKind::MalformedExpression);
    }

    #[test]
    fn no_operator_at_all() {
        assert_eq!(kind(""), ErrorKind::MissingOperator);
        assert_eq!(kind("hello"), ErrorKind::MissingOperator);
        assert_eq!(kind("1 2 3 4"), ErrorKind::MissingOperator);
    }
}
