//! Domain layer
//! 계산 규칙(연산/요청/오류/출력 정책)을 외부 시스템 없이 표현한다.

pub mod arithmetic;
pub mod error;
pub mod operation;
pub mod policy;

pub use arithmetic::Calculator;
pub use error::CalcError;
pub use operation::{CalculationRequest, Operation};
