//! 서브커맨드 없이 실행했을 때 보여주는 사용 예시.

use crate::application::ports::{Evaluator, Reporter};
use crate::domain::policy::format_number;
use crate::domain::{CalculationRequest, Operation};

const SAMPLES: [CalculationRequest; 5] = [
    CalculationRequest::new(Operation::Add, 2.0, 3.0),
    CalculationRequest::new(Operation::Subtract, 5.0, 1.0),
    CalculationRequest::new(Operation::Multiply, 4.0, 2.5),
    CalculationRequest::new(Operation::Divide, 10.0, 2.0),
    CalculationRequest::new(Operation::Divide, 1.0, 0.0),
];

pub struct SampleUsageUseCase<'a> {
    pub evaluator: &'a dyn Evaluator,
    pub reporter: &'a dyn Reporter,
    pub precision: Option<usize>,
}

impl<'a> SampleUsageUseCase<'a> {
    pub fn execute(&self) {
        self.reporter
            .raw(&format!("Calculator demo v{}", env!("CARGO_PKG_VERSION")));
        self.reporter.raw("Sample usage:");

        for request in &SAMPLES {
            let expr = format!("{} {} {}", request.lhs, request.op.symbol(), request.rhs);
            let line = match self.evaluator.evaluate(request) {
                Ok(value) => format!("  {expr} = {}", format_number(value, self.precision)),
                Err(err) => format!("  {expr} -> error: {err}"),
            };
            self.reporter.raw(&line);
        }
    }
}
