// src/calculator_cli.rs
use std::io::{self, BufRead, Write};

use log::debug;
use word_counter_core::{Calculator, CalculatorOutcome, error::ErrorKind};

use crate::presentation::{describe_error, format_number};

const PROMPT: &str = "Digite a operação (ex: 2 + 3): ";

fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Bem-vindo à Calculadora!")?;
    writeln!(out, "Operações disponíveis: + (adição), - (subtração), * (multiplicação), / (divisão)")?;
    writeln!(out, "Digite 'sair' a qualquer momento para encerrar.\n")
}

/// Read-eval-print loop; ends on the exit keyword or end of input.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    let calculator = Calculator::new();
    print_banner(&mut out)?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match calculator.evaluate_line(&line) {
            Ok(CalculatorOutcome::Exit) => break,
            Ok(CalculatorOutcome::Value(value)) => writeln!(out, "Resultado: {}\n", format_number(value))?,
            Err(err) => {
                debug!("rejected '{}': {err}", line.trim());
                writeln!(out, "{}", describe_error(&err))?;
                // Only operands that fail to parse get the spacer line.
                if err.kind() == ErrorKind::MalformedExpression {
                    writeln!(out)?;
                }
            }
        }
    }

    writeln!(out, "Encerrando a calculadora. Até logo!")?;
    out.flush()
}
