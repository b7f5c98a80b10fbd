//! 사칙연산 엔진.

use crate::domain::error::CalcError;
use crate::domain::operation::CalculationRequest;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `b`가 정확히 0이면(`-0.0` 포함) 실패한다. 허용 오차는 두지 않는다.
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// 상태 없는 계산기. 요청 하나를 받아 결과 하나를 돌려준다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, request: &CalculationRequest) -> Result<f64, CalcError> {
        request.op.apply(request.lhs, request.rhs)
    }
}
