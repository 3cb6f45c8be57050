//! End-to-end tests for the learning-graph-check binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const CYCLIC_GRAPH: &str = r#"{
    "nodes": [
        {"id": 1, "label": "Variables"},
        {"id": 2, "label": "Loops"},
        {"id": 3, "label": "Functions"}
    ],
    "edges": [
        {"from": 1, "to": 2},
        {"from": 2, "to": 3},
        {"from": 3, "to": 1}
    ]
}"#;

const CLEAN_GRAPH: &str = r#"{
    "nodes": [
        {"id": 1, "label": "Variables"},
        {"id": 2, "label": "Loops"}
    ],
    "edges": [
        {"from": 2, "to": 1},
        {"from": 2, "to": 7}
    ]
}"#;

fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("learning-graph-check");
    cmd.env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prerequisite cycles"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("spotlight"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn test_check_reports_cycle_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CYCLIC_GRAPH);

    cli()
        .arg("check")
        .arg(&graph)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 cycle"))
        .stdout(predicate::str::contains(
            "Path: Variables → Loops → Functions → Variables",
        ));
}

#[test]
fn test_check_allow_cycles_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CYCLIC_GRAPH);

    cli()
        .args(["check", "--allow-cycles"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 cycle"));
}

#[test]
fn test_check_allow_cycles_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CYCLIC_GRAPH);

    cli()
        .env("LEARNING_GRAPH_ALLOW_CYCLES", "true")
        .arg("check")
        .arg(&graph)
        .assert()
        .success();
}

#[test]
fn test_check_clean_graph_ignores_dangling_edges() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CLEAN_GRAPH);

    cli()
        .arg("check")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("No cycles found"));
}

#[test]
fn test_check_empty_graph_warns_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", "{}");

    cli()
        .arg("check")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("No nodes found in the graph"));
}

#[test]
fn test_check_empty_graph_warning_goes_to_stderr_for_json() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", r#"{"nodes": []}"#);

    cli()
        .args(["check", "--format", "json"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "empty""#))
        .stderr(predicate::str::contains("No nodes found in the graph"));
}

#[test]
fn test_check_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    cli()
        .arg("check")
        .arg(temp_dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_check_malformed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", "{ \"nodes\": [ }");

    cli()
        .arg("check")
        .arg(&graph)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_check_directory_uses_pattern() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path(), "chapter-1/graph.json", CYCLIC_GRAPH);
    write_graph(temp_dir.path(), "chapter-2/learning-graph.json", CLEAN_GRAPH);

    // The default pattern only finds the clean chapter
    cli()
        .arg("check")
        .arg(temp_dir.path())
        .assert()
        .success();

    cli()
        .args(["check", "--pattern", "*.json"])
        .arg(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checked 2 learning graphs, 1 with cycles."));
}

#[test]
fn test_check_github_format() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CYCLIC_GRAPH);

    cli()
        .args(["check", "--format", "github"])
        .arg(&graph)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("::error file="))
        .stdout(predicate::str::contains("Variables → Loops → Functions → Variables"));
}

#[test]
fn test_spotlight_filters_by_topic() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(
        temp_dir.path(),
        "learning-graph.json",
        r#"{
            "nodes": [
                {"id": "a", "label": "Sets"},
                {"id": "b", "label": "Relations"},
                {"id": "c", "label": "Logic"}
            ],
            "edges": [
                {"from": "a", "to": "b"},
                {"from": "b", "to": "a"},
                {"from": "c", "to": "c"}
            ]
        }"#,
    );

    cli()
        .args(["spotlight", "Logic"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: Logic → Logic"))
        .stdout(predicate::str::contains("Sets").not());
}

#[test]
fn test_spotlight_unknown_topic_fails() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CLEAN_GRAPH);

    cli()
        .args(["spotlight", "Quantum Computing"])
        .arg(&graph)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Topic 'Quantum Computing' not found in any learning graph",
        ));
}

#[test]
fn test_render_mermaid_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CYCLIC_GRAPH);
    let output = temp_dir.path().join("graph.mmd");

    cli()
        .args(["render", "--format", "mermaid", "--output"])
        .arg(&output)
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("Graph written to"));

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.starts_with("graph TD"));
    assert!(rendered.contains("n0((\"Variables\"))"));
}

#[test]
fn test_render_dot_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let graph = write_graph(temp_dir.path(), "learning-graph.json", CLEAN_GRAPH);

    cli()
        .args(["render", "--format", "dot", "--show-ids"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph learning_graph {"))
        .stdout(predicate::str::contains(r#"label="2: Loops""#));
}
