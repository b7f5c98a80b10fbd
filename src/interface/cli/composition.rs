//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, Evaluator, Reporter};
use crate::application::usecases::calculate::CalculateUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::sample_usage::SampleUsageUseCase;
use crate::application::usecases::self_test::SelfTestUseCase;
use crate::domain::Calculator;
use crate::infrastructure::adapters::{ConsoleReporter, JsonConfigRepository};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    calculator: Calculator,
    reporter: Box<dyn Reporter>,
    config: Config,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl AppComposition {
    /// 설정 파일을 병합 로딩해 조합을 만든다.
    pub fn load() -> Result<Self> {
        let config = JsonConfigRepository.load()?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_reporter(config, Box::new(ConsoleReporter))
    }

    /// 출력 대상을 교체한 조합을 만든다.
    pub fn with_reporter(config: Config, reporter: Box<dyn Reporter>) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            calculator: Calculator::new(),
            reporter,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        &self.calculator
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    /// 자가 진단 유스케이스를 생성한다.
    pub fn self_test_usecase(&self) -> SelfTestUseCase<'_> {
        SelfTestUseCase {
            evaluator: &self.calculator,
            reporter: self.reporter.as_ref(),
        }
    }

    /// 단일 계산 유스케이스를 생성한다.
    pub fn calculate_usecase(&self) -> CalculateUseCase<'_> {
        CalculateUseCase {
            evaluator: &self.calculator,
            reporter: self.reporter.as_ref(),
            precision: self.config.precision(),
        }
    }

    /// 사용 예시 유스케이스를 생성한다.
    pub fn sample_usage_usecase(&self) -> SampleUsageUseCase<'_> {
        SampleUsageUseCase {
            evaluator: &self.calculator,
            reporter: self.reporter.as_ref(),
            precision: self.config.precision(),
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
