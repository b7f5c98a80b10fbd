//! 단일 계산 유스케이스(`calc <op> <a> <b>`).

use tracing::debug;

use crate::application::ports::{Evaluator, Reporter};
use crate::domain::policy::format_number;
use crate::domain::{CalcError, CalculationRequest};

pub struct CalculateUseCase<'a> {
    pub evaluator: &'a dyn Evaluator,
    pub reporter: &'a dyn Reporter,
    pub precision: Option<usize>,
}

impl<'a> CalculateUseCase<'a> {
    /// 성공하면 결과를 한 줄 출력한다. 엔진 오류는 출력하지 않고 호출자에게 넘긴다.
    pub fn execute(&self, request: &CalculationRequest) -> Result<f64, CalcError> {
        let value = self.evaluator.evaluate(request)?;
        debug!(op = %request.op, value, "calculation finished");
        self.reporter.raw(&format_number(value, self.precision));
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::usecases::testing::RecordingReporter;
    use crate::domain::{Calculator, Operation};

    #[test]
    fn test_prints_result() {
        let reporter = RecordingReporter::default();
        let usecase = CalculateUseCase {
            evaluator: &Calculator,
            reporter: &reporter,
            precision: None,
        };

        let value = usecase
            .execute(&CalculationRequest::new(Operation::Add, 2.0, 3.0))
            .unwrap();

        assert_eq!(value, 5.0);
        assert_eq!(reporter.out_lines(), vec!["5.0"]);
    }

    #[test]
    fn test_applies_precision() {
        let reporter = RecordingReporter::default();
        let usecase = CalculateUseCase {
            evaluator: &Calculator,
            reporter: &reporter,
            precision: Some(2),
        };

        usecase
            .execute(&CalculationRequest::new(Operation::Divide, 1.0, 3.0))
            .unwrap();

        assert_eq!(reporter.out_lines(), vec!["0.33"]);
    }

    #[test]
    fn test_division_by_zero_prints_nothing() {
        let reporter = RecordingReporter::default();
        let usecase = CalculateUseCase {
            evaluator: &Calculator,
            reporter: &reporter,
            precision: None,
        };

        let err = usecase
            .execute(&CalculationRequest::new(Operation::Divide, 10.0, 0.0))
            .unwrap_err();

        assert_eq!(err, CalcError::DivisionByZero);
        assert!(reporter.out_lines().is_empty());
    }
}
