use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{SAMPLE_TEXT, TempWorkspace, script};

fn word_counter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_word_counter"))
}

#[test]
fn shows_help() {
    word_counter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("word_counter"))
        .stdout(predicate::str::contains("--report-format"));
}

#[test]
fn rejects_zero_top() {
    word_counter().args(["--top", "0"]).assert().failure();
}

#[test]
fn exits_from_menu() {
    word_counter()
        .write_stdin(script(&["7"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("📚 CONTADOR DE PALAVRAS - MENU PRINCIPAL"))
        .stdout(predicate::str::ends_with("👋 Obrigado por usar o Contador de Palavras!\n"));
}

#[test]
fn loads_file_and_prints_statistics() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("texto.txt", SAMPLE_TEXT);

    word_counter()
        .write_stdin(script(&["1", path.to_str().unwrap(), "2", "7"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Arquivo 'texto.txt' carregado com sucesso!"))
        .stdout(predicate::str::contains("📝 Total de palavras: 10"))
        .stdout(predicate::str::contains("🔤 Palavras únicas: 7"))
        .stdout(predicate::str::contains("📏 Total de caracteres: 42"))
        .stdout(predicate::str::contains("📄 Total de linhas: 2"))
        .stdout(predicate::str::contains("⭐ Palavra mais frequente: 'o' (3 vezes)"));
}

#[test]
fn preloads_positional_file_and_searches() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("texto.txt", SAMPLE_TEXT);

    word_counter()
        .arg(&path)
        .write_stdin(script(&["4", "Gato", "4", "cachorro", "7"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Palavra 'Gato' encontrada 2 vezes"))
        .stdout(predicate::str::contains("❌ Palavra 'cachorro' não encontrada no texto"));
}

#[test]
fn exports_text_report_into_working_directory() {
    let ws = TempWorkspace::new();
    ws.create_file("texto.txt", SAMPLE_TEXT);

    word_counter()
        .current_dir(ws.path())
        .arg("texto.txt")
        .write_stdin(script(&["6", "", "7"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Relatório salvo em 'relatorio_palavras.txt'"));

    let report = ws.read("relatorio_palavras.txt");
    assert!(report.starts_with("RELATÓRIO DE ANÁLISE DE TEXTO\n"));
    assert!(report.contains("Total de palavras: 10\n"));
    assert!(report.contains("o: 3\ngato: 2\n"));
}

#[test]
fn exports_json_report() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("texto.txt", SAMPLE_TEXT);
    let report = ws.path().join("saida.json");

    word_counter()
        .args(["--report-format", "json", "--report"])
        .arg(&report)
        .arg(&path)
        .write_stdin(script(&["6", "", "7"]))
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&ws.read("saida.json")).unwrap();
    assert_eq!(json["statistics"]["total_words"], 10);
    assert_eq!(json["top_words"][0]["token"], "o");
}

#[test]
fn missing_file_is_reported_and_menu_continues() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("nao_existe.txt");

    word_counter()
        .write_stdin(script(&["1", missing.to_str().unwrap(), "2", "7"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Arquivo não encontrado."))
        .stdout(predicate::str::contains("❌ Carregue um arquivo primeiro!"));
}

#[test]
fn invalid_utf8_is_an_encoding_error() {
    let ws = TempWorkspace::new();
    let path = ws.create_binary("latin1.txt", &[0x63, 0x61, 0xe7, 0xe3, 0x6f]);

    word_counter()
        .arg(&path)
        .write_stdin(script(&["7"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ Erro de codificação."));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ws = TempWorkspace::new();
    let path = ws.create_file("texto.txt", SAMPLE_TEXT);

    word_counter()
        .arg("-v")
        .arg(&path)
        .write_stdin(script(&["7"]))
        .assert()
        .success()
        .stderr(predicate::str::contains("[INFO] loaded 'texto.txt'"))
        .stdout(predicate::str::contains("[INFO]").not());
}
