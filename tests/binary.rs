//! Runs the built `dockerfile-gen` binary against a mock Ollama server.

use std::path::Path;
use std::process::{Output, Stdio};

use serde_json::json;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUESTION: &str = "Enter the programming language (e.g., Python, Node.js, Java): ";
const HEADER: &str = "\nGenerated Dockerfile:\n\n";

fn write_config(dir: &Path, base_url: &str) -> std::path::PathBuf {
    let config_path = dir.join("dockerfile-gen.yaml");
    std::fs::write(
        &config_path,
        format!("llm_provider: ollama_llm\nollama_llm:\n  base_url: {}\n", base_url),
    )
    .unwrap();
    config_path
}

async fn run_binary(config_path: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dockerfile-gen"))
        .env("CONFIG_PATH", config_path)
        .env("RUST_LOG", "dockerfile_gen=debug")
        .env_remove("OLLAMA_HOST")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn dockerfile-gen");

    let mut child_stdin = child.stdin.take().unwrap();
    child_stdin.write_all(stdin.as_bytes()).await.unwrap();
    drop(child_stdin);

    child.wait_with_output().await.unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn prints_question_header_and_reply_and_exits_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"role": "assistant", "content": "FROM python:3.12-slim\n..."},
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), &server.uri());

    let output = run_binary(&config_path, "Python\n").await;
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "exit {:?}, stderr: {}", output.status, stderr);
    assert_eq!(
        stdout,
        format!("{}{}FROM python:3.12-slim\n...\n", QUESTION, HEADER)
    );
    // Debug logs were enabled and must not leak into stdout
    assert!(stderr.contains("Generating Dockerfile"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn model_not_found_exits_non_zero_without_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "model \"gemma3\" not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), &server.uri());

    let output = run_binary(&config_path, "Python\n").await;
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert_eq!(stdout, QUESTION);
    assert!(!stdout.contains("Generated Dockerfile"));
    assert!(stderr.contains("model \"gemma3\" not found"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_stdin_exits_non_zero_without_calling_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(dir.path(), &server.uri());

    let output = run_binary(&config_path, "").await;

    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), QUESTION);
}
