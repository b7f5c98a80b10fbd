//! calcdemo library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::{CalcError, CalculationRequest, Calculator, Operation};

/// 라이브러리 직접 호출용 단일 계산 함수.
pub fn calculate(op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
    Calculator::new().evaluate(&CalculationRequest::new(op, a, b))
}
