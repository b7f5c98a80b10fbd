//! 연산 종류와 계산 요청 값 객체.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::domain::arithmetic;
use crate::domain::error::CalcError;

/// 이름으로 선택하는 사칙연산.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// CLI/REPL에서 쓰는 이름.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        debug!(op = self.name(), a, b, "applying operation");
        match self {
            Operation::Add => Ok(arithmetic::add(a, b)),
            Operation::Subtract => Ok(arithmetic::subtract(a, b)),
            Operation::Multiply => Ok(arithmetic::multiply(a, b)),
            Operation::Divide => arithmetic::divide(a, b),
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// 대소문자를 구분하는 정확 일치만 허용한다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(연산, 피연산자1, 피연산자2)` 한 건. 호출마다 새로 만들고 보관하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub op: Operation,
    pub lhs: f64,
    pub rhs: f64,
}

impl CalculationRequest {
    pub const fn new(op: Operation, lhs: f64, rhs: f64) -> Self {
        Self { op, lhs, rhs }
    }

    /// `<op> <a> <b>` 형식의 한 줄을 요청으로 변환한다.
    /// 토큰 수 → 연산 이름 → 피연산자 순서로 검증한다.
    pub fn parse(line: &str) -> Result<Self, CalcError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [op, lhs, rhs] = parts.as_slice() else {
            return Err(CalcError::MalformedCommand(parts.len()));
        };

        let op: Operation = op.parse()?;
        Ok(Self {
            op,
            lhs: parse_operand(lhs)?,
            rhs: parse_operand(rhs)?,
        })
    }
}

/// 피연산자 토큰을 부동소수점으로 해석한다. 정수/실수를 구분하지 않는다.
pub fn parse_operand(token: &str) -> Result<f64, CalcError> {
    token
        .parse::<f64>()
        .map_err(|_| CalcError::MalformedOperand(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_are_case_sensitive() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("div".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!(
            "ADD".parse::<Operation>(),
            Err(CalcError::UnknownOperation("ADD".to_string()))
        );
        assert!("subtract".parse::<Operation>().is_err());
    }

    #[test]
    fn test_name_round_trips_for_every_operation() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn test_parse_request() {
        let request = CalculationRequest::parse("  sub 5   -3.5 ").unwrap();
        assert_eq!(request, CalculationRequest::new(Operation::Subtract, 5.0, -3.5));
        assert_eq!(request.op.apply(request.lhs, request.rhs), Ok(8.5));
    }

    #[test]
    fn test_parse_request_rejects_wrong_token_count() {
        assert_eq!(
            CalculationRequest::parse("add 1"),
            Err(CalcError::MalformedCommand(2))
        );
        assert_eq!(
            CalculationRequest::parse("add 1 2 3"),
            Err(CalcError::MalformedCommand(4))
        );
    }

    #[test]
    fn test_parse_request_checks_operation_before_operands() {
        assert_eq!(
            CalculationRequest::parse("pow x 1"),
            Err(CalcError::UnknownOperation("pow".to_string()))
        );
        assert_eq!(
            CalculationRequest::parse("mul 2 x"),
            Err(CalcError::MalformedOperand("x".to_string()))
        );
    }

    #[test]
    fn test_parse_operand_accepts_float_literals() {
        assert_eq!(parse_operand("2"), Ok(2.0));
        assert_eq!(parse_operand("1e3"), Ok(1000.0));
        assert_eq!(parse_operand("-.5"), Ok(-0.5));
        assert!(parse_operand("inf").unwrap().is_infinite());
        assert!(parse_operand("1,5").is_err());
    }
}
