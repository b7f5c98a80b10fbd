//! 계산 도메인 오류.

use thiserror::Error;

/// 계산 요청을 만들거나 평가하는 중 발생하는 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// 나눗셈의 두 번째 피연산자가 정확히 0이다.
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operand `{0}`")]
    MalformedOperand(String),
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    /// REPL 입력의 토큰 수가 3이 아니다.
    #[error("expected 3 tokens, got {0}")]
    MalformedCommand(usize),
}
