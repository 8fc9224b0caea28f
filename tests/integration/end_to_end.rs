// tests/integration/end_to_end.rs
use std::io::Cursor;

use word_counter::{
    config::{Config, ConfigBuilder},
    menu::Menu,
};
use word_counter_core::{Adapters, Phase, ports::report::ReportFormat};

use crate::common::{SAMPLE_TEXT, TempWorkspace, script};

fn run(config: &Config, input: &str) -> (String, Phase) {
    let adapters = Adapters::new(config.report_format);
    let mut out = Vec::new();
    let mut menu = Menu::new(adapters.analyzer(), config, Cursor::new(input.to_owned()), &mut out);
    menu.run().unwrap();
    let phase = menu.analyzer().phase();
    drop(menu);
    (String::from_utf8(out).unwrap(), phase)
}

#[test]
fn full_session_over_every_option() {
    let ws = TempWorkspace::new();
    let text = ws.create_file("texto.txt", SAMPLE_TEXT);
    let report = ws.path().join("relatorio.txt");
    let config = ConfigBuilder::default().report_path(report.clone()).build().unwrap();

    let input = script(&[
        "1",
        text.to_str().unwrap(),
        "2",
        "3",
        "3",
        "4",
        "JARDIM",
        "5",
        "5",
        "6",
        "6",
        "",
        "7",
    ]);
    let (out, phase) = run(&config, &input);

    assert_eq!(phase, Phase::Processed);
    assert!(out.contains("📈 TOP 3 PALAVRAS MAIS FREQUENTES"));
    assert!(out.contains(" 3. e                    (  1 vezes)"));
    assert!(out.contains("✅ Palavra 'JARDIM' encontrada 1 vezes"));
    assert!(out.contains("🔍 PALAVRAS COM 5-6 CARACTERES"));
    assert!(out.contains("corre                (  1 vezes)"));
    assert!(out.contains("jardim               (  1 vezes)"));
    assert!(!out.contains("pelo"));

    let saved = ws.read("relatorio.txt");
    assert!(saved.contains("Palavras únicas: 7\n"));
    assert!(saved.contains("Total de linhas: 2\n"));
}

#[test]
fn reloading_replaces_previous_analysis() {
    let ws = TempWorkspace::new();
    let first = ws.create_file("a.txt", SAMPLE_TEXT);
    let second = ws.create_file("b.txt", "sol sol lua");
    let config = Config { initial_file: Some(first), ..Config::default() };

    let (out, _) = run(&config, &script(&["1", second.to_str().unwrap(), "2", "4", "gato", "7"]));
    assert!(out.contains("✅ Arquivo 'b.txt' carregado com sucesso!"));
    assert!(out.contains("📝 Total de palavras: 3"));
    assert!(out.contains("⭐ Palavra mais frequente: 'sol' (2 vezes)"));
    assert!(out.contains("❌ Palavra 'gato' não encontrada no texto"));
}

#[test]
fn empty_file_loads_but_cannot_be_queried() {
    let ws = TempWorkspace::new();
    let empty = ws.create_file("vazio.txt", "");
    let config = Config::default();

    let (out, phase) = run(&config, &script(&["1", empty.to_str().unwrap(), "2", "7"]));
    assert_eq!(phase, Phase::Loaded);
    assert!(out.contains("✅ Arquivo 'vazio.txt' carregado com sucesso!"));
    assert!(out.contains("❌ Nenhum conteúdo para processar."));
    assert!(out.contains("❌ Carregue um arquivo primeiro!"));
}

#[test]
fn json_export_uses_configured_format() {
    let ws = TempWorkspace::new();
    let text = ws.create_file("texto.txt", SAMPLE_TEXT);
    let config = Config { initial_file: Some(text), report_format: ReportFormat::Json, ..Config::default() };
    let target = ws.path().join("saida.json");

    let (out, _) = run(&config, &script(&["6", target.to_str().unwrap(), "7"]));
    assert!(out.contains("✅ Relatório salvo em"));
    let json: serde_json::Value = serde_json::from_str(&ws.read("saida.json")).unwrap();
    assert_eq!(json["source"], "texto.txt");
    assert_eq!(json["statistics"]["unique_words"], 7);
}

#[test]
fn export_into_missing_directory_reports_failure() {
    let ws = TempWorkspace::new();
    let text = ws.create_file("texto.txt", SAMPLE_TEXT);
    let config = Config { initial_file: Some(text), ..Config::default() };
    let target = ws.path().join("nao/existe/rel.txt");

    let (out, _) = run(&config, &script(&["6", target.to_str().unwrap(), "7"]));
    assert!(out.contains("❌ Erro ao salvar relatório:"));
}
