//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

use crate::application::config::Config;
use crate::domain::{CalcError, CalculationRequest, Calculator};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 계산 요청을 평가하는 엔진 포트.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, request: &CalculationRequest) -> Result<f64, CalcError>;
}

impl Evaluator for Calculator {
    fn evaluate(&self, request: &CalculationRequest) -> Result<f64, CalcError> {
        Calculator::evaluate(self, request)
    }
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    /// 표준 출력 한 줄.
    fn raw(&self, line: &str);
    /// 표준 에러 한 줄.
    fn error(&self, line: &str);
}

/// REPL 한 줄 입력 포트. 입력 종료(EOF/인터럽트)면 `None`을 돌려준다.
pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}
