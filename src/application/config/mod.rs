//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::domain::policy::MAX_PRECISION;

pub const DEFAULT_PROMPT: &str = "calc> ";

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct Config {
    /// 대화형 쉘 설정
    #[serde(default)]
    pub repl: ReplConfig,
    /// 결과 출력 설정
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ReplConfig {
    /// 입력 프롬프트
    pub prompt: Option<String>,
    /// 시작 안내문 출력 여부(기본 true)
    pub banner: Option<bool>,
    /// TTY에서 줄 편집기 사용 여부(기본 true)
    pub line_editor: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct OutputConfig {
    /// 결과 소수 자릿수. 없으면 최단 표기
    pub precision: Option<usize>,
}

impl Config {
    pub fn prompt(&self) -> &str {
        self.repl.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn banner_enabled(&self) -> bool {
        self.repl.banner.unwrap_or(true)
    }

    pub fn line_editor_enabled(&self) -> bool {
        self.repl.line_editor.unwrap_or(true)
    }

    pub fn precision(&self) -> Option<usize> {
        self.output.precision.map(|digits| digits.min(MAX_PRECISION))
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.repl.merge_from(other.repl);
        self.output.merge_from(other.output);
    }
}

impl ReplConfig {
    pub fn merge_from(&mut self, other: ReplConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.banner.is_some() {
            self.banner = other.banner;
        }
        if other.line_editor.is_some() {
            self.line_editor = other.line_editor;
        }
    }
}

impl OutputConfig {
    pub fn merge_from(&mut self, other: OutputConfig) {
        if other.precision.is_some() {
            self.precision = other.precision;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt(), "calc> ");
        assert!(config.banner_enabled());
        assert!(config.line_editor_enabled());
        assert_eq!(config.precision(), None);
    }

    #[test]
    fn test_merge_overrides_only_present_fields() {
        let mut base: Config =
            serde_json::from_str(r#"{"repl":{"prompt":">> ","banner":false}}"#).unwrap();
        let next: Config =
            serde_json::from_str(r#"{"repl":{"banner":true},"output":{"precision":3}}"#)
                .unwrap();
        base.merge_from(next);

        assert_eq!(base.prompt(), ">> ");
        assert!(base.banner_enabled());
        assert_eq!(base.precision(), Some(3));
    }

    #[test]
    fn test_precision_is_clamped() {
        let config: Config = serde_json::from_str(r#"{"output":{"precision":99}}"#).unwrap();
        assert_eq!(config.precision(), Some(MAX_PRECISION));
    }
}
