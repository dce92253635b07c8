//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 바꾸는 환경 변수
pub const CONFIG_ENV: &str = "HANGEUL_CONFIG";

/// CLI 출력 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// hangeul 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HangeulConfig {
    /// 출력 형식
    #[serde(default)]
    pub output_format: OutputFormat,
    /// 텍스트 출력에 음절별 자모 분해를 포함할지
    #[serde(default = "default_show_jamo")]
    pub show_jamo: bool,
    /// env_logger 기본 필터 (RUST_LOG가 있으면 그쪽이 우선)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_show_jamo() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for HangeulConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            show_jamo: default_show_jamo(),
            log_filter: default_log_filter(),
        }
    }
}

/// 설정 파일 경로: $HANGEUL_CONFIG 또는 ~/.config/hangeul/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangeul").join("config.json")
}

/// 설정 파일 로드
///
/// 파일이 없으면 기본값, 읽기/파싱에 실패하면 에러 메시지를 반환합니다.
/// 경고 로그는 로거를 초기화한 호출자가 남깁니다.
pub fn load_config() -> Result<HangeulConfig, String> {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 파일 로드
pub fn load_config_from(path: &Path) -> Result<HangeulConfig, String> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .map_err(|e| format!("설정 파일 파싱 실패 ({}): {}", path.display(), e)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HangeulConfig::default()),
        Err(e) => Err(format!("설정 파일 읽기 실패 ({}): {}", path.display(), e)),
    }
}

/// JSON 문자열에서 설정 파싱
pub fn parse_config(content: &str) -> Result<HangeulConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// 설정 파일 저장
pub fn save_config(config: &HangeulConfig) -> Result<PathBuf, String> {
    let path = config_path();
    save_config_to(&path, config)?;
    Ok(path)
}

/// 지정한 경로에 설정 파일 저장
pub fn save_config_to(path: &Path, config: &HangeulConfig) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HangeulConfig::default();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.show_jamo);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HangeulConfig {
            output_format: OutputFormat::Json,
            show_jamo: false,
            log_filter: "debug".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = parse_config(r#"{"output_format": "json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.show_jamo);
        assert_eq!(config.log_filter, "warn");

        let config = parse_config("{}").unwrap();
        assert_eq!(config, HangeulConfig::default());
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hangeul-config-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_load_missing_file_uses_default() {
        let path = temp_path("missing");
        assert_eq!(load_config_from(&path), Ok(HangeulConfig::default()));
    }

    #[test]
    fn test_load_broken_file_reports_error() {
        let path = temp_path("broken");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.starts_with("설정 파일 파싱 실패"));
        assert!(err.contains(&path.display().to_string()));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("round-trip");
        let config = HangeulConfig {
            output_format: OutputFormat::Json,
            show_jamo: false,
            log_filter: "info".to_string(),
        };
        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), Ok(config));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_invalid_format_is_error() {
        assert!(parse_config(r#"{"output_format": "yaml"}"#).is_err());
    }
}
