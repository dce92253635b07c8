//! hangeul 바이너리 실행 테스트 (설정 파일 처리)

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use hangeul::config::{load_config_from, OutputFormat, CONFIG_ENV};

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hangeul-cli-test-{}-{}", std::process::id(), name))
}

fn run_with_config(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hangeul"))
        .args(args)
        .env(CONFIG_ENV, config)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn test_broken_config_warns_and_uses_default() {
    let dir = temp_dir("broken");
    fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.json");
    fs::write(&config, "{ not json").unwrap();

    let output = run_with_config(&config, &["가"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("설정 파일 파싱 실패"), "stderr: {}", stderr);
    assert!(stderr.contains("기본 설정을 사용합니다"), "stderr: {}", stderr);
    // 기본 설정(텍스트 출력)으로 계속 동작
    assert!(stdout.contains("+아"), "stdout: {}", stdout);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_config_is_silent() {
    let dir = temp_dir("missing");
    let config = dir.join("config.json");

    let output = run_with_config(&config, &["먹"]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(!config.exists());
}

#[test]
fn test_save_config_writes_file() {
    let dir = temp_dir("save");
    let config = dir.join("nested").join("config.json");

    let output = run_with_config(&config, &["--json", "--no-jamo", "--save-config"]);
    assert!(output.status.success());
    // 단어가 없으면 저장만 하고 입력을 읽지 않음
    assert!(output.stdout.is_empty());

    let saved = load_config_from(&config).unwrap();
    assert_eq!(saved.output_format, OutputFormat::Json);
    assert!(!saved.show_jamo);

    // 저장된 설정이 다음 실행에 적용됨
    let output = run_with_config(&config, &["가"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"vowel_to_append\":\"아\""), "stdout: {}", stdout);

    fs::remove_dir_all(&dir).unwrap();
}
