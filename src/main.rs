//! hangeul - 한글 음절 분해와 모음조화 확인 도구
//!
//! 사용법: hangeul [--json | --text] [--no-jamo] [--save-config] [단어...]
//! 단어가 없으면 표준 입력에서 한 줄에 한 단어씩 읽습니다.
//! `--save-config`는 옵션이 적용된 설정을 설정 파일에 저장합니다.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use hangeul::analysis::analyze;
use hangeul::config::{load_config, save_config, HangeulConfig, OutputFormat};
use hangeul::wrap;

const USAGE: &str = "사용법: hangeul [--json | --text] [--no-jamo] [--save-config] [단어...]";

/// 명령행 인자 해석 결과
struct Options {
    config: HangeulConfig,
    words: Vec<String>,
    save_config: bool,
}

fn parse_args(mut config: HangeulConfig, args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut words = Vec::new();
    let mut save_config = false;
    for arg in args {
        match arg.as_str() {
            "--json" => config.output_format = OutputFormat::Json,
            "--text" => config.output_format = OutputFormat::Text,
            "--no-jamo" => config.show_jamo = false,
            "--save-config" => save_config = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            flag if flag.starts_with("--") => {
                return Err(format!("알 수 없는 옵션: {}\n{}", flag, USAGE));
            }
            _ => words.push(arg),
        }
    }
    Ok(Options {
        config,
        words,
        save_config,
    })
}

fn render(word: &str, config: &HangeulConfig) -> Result<String, serde_json::Error> {
    let result = analyze(&wrap(word));
    match config.output_format {
        OutputFormat::Json => serde_json::to_string(&result),
        OutputFormat::Text => Ok(result.render_text(config.show_jamo)),
    }
}

fn run(options: &Options) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut emit = |word: &str| -> io::Result<()> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(());
        }
        match render(word, &options.config) {
            Ok(line) => writeln!(out, "{}", line),
            Err(e) => {
                log::error!("출력 직렬화 실패 ({}): {}", word, e);
                Ok(())
            }
        }
    };

    if options.words.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&line?)?;
        }
    } else {
        for word in &options.words {
            emit(word)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // 설정 로드 (실패 시 기본값, 경고는 로거 초기화 후 출력)
    let (config, load_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (HangeulConfig::default(), Some(e)),
    };

    // 로깅 초기화 (RUST_LOG가 없으면 설정의 필터 사용)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    if let Some(e) = load_error {
        log::warn!("{}, 기본 설정을 사용합니다", e);
    }

    let options = match parse_args(config, std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    if options.save_config {
        match save_config(&options.config) {
            Ok(path) => log::info!("설정 저장: {}", path.display()),
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
        if options.words.is_empty() {
            return ExitCode::SUCCESS;
        }
    }

    if let Err(e) = run(&options) {
        log::error!("입출력 실패: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
