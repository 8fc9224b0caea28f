use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::script;

fn calculator() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calculator"))
}

#[test]
fn evaluates_and_exits() {
    calculator()
        .write_stdin(script(&["2 + 3", "10/4", "sair"]))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Bem-vindo à Calculadora!"))
        .stdout(predicate::str::contains("Resultado: 5.0"))
        .stdout(predicate::str::contains("Resultado: 2.5"))
        .stdout(predicate::str::ends_with("Encerrando a calculadora. Até logo!\n"));
}

#[test]
fn division_by_zero_keeps_running() {
    calculator()
        .write_stdin(script(&["10 / 0", "3,5 * 2", "sair"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Erro: divisão por zero!"))
        .stdout(predicate::str::contains("Resultado: 7.0"));
}

#[test]
fn rejects_unknown_operator_and_garbage() {
    calculator()
        .write_stdin(script(&["2 ^ 3", "dois mais três", "sair"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Operador inválido. Use +, -, * ou /."))
        .stdout(predicate::str::contains("Entrada inválida. Tente novamente."));
}

#[test]
fn end_of_input_exits_cleanly() {
    calculator()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encerrando a calculadora. Até logo!"));
}
