//! 파싱된 CLI 동작을 유스케이스로 라우팅하고 종료 코드를 결정한다.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::Reporter;
use crate::interface::cli::command::CliAction;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::repl::run_repl;
use crate::interface::cli::repl_input::{TerminalInput, exit_on_interrupt};

pub const EXIT_OK: i32 = 0;
/// 계산 엔진 오류(0으로 나누기 등)로 끝난 단일 계산.
pub const EXIT_CALC_ERROR: i32 = 2;

/// 동작에 필요한 경우에만 설정을 로딩한 뒤 실행한다.
pub fn run_action(action: CliAction) -> Result<i32> {
    let composition = match action {
        CliAction::SelfTest | CliAction::InspectConfig => AppComposition::default(),
        _ => AppComposition::load()?,
    };
    execute_action(&composition, action)
}

pub fn execute_action(composition: &AppComposition, action: CliAction) -> Result<i32> {
    debug!(?action, "dispatching");

    match action {
        CliAction::SelfTest => Ok(composition.self_test_usecase().execute().exit_code()),
        CliAction::Calculate(request) => match composition.calculate_usecase().execute(&request) {
            Ok(_) => Ok(EXIT_OK),
            Err(err) => {
                composition.reporter().error(&format!("Error: {err}"));
                Ok(EXIT_CALC_ERROR)
            }
        },
        CliAction::Interactive => {
            let config = composition.config();
            exit_on_interrupt()?;
            let mut input = TerminalInput::new(config.line_editor_enabled());
            run_repl(
                composition.evaluator(),
                composition.reporter(),
                &mut input,
                config,
            )?;
            Ok(EXIT_OK)
        }
        CliAction::InspectConfig => {
            let json = composition.inspect_config_usecase().execute()?;
            composition.reporter().raw(&json);
            Ok(EXIT_OK)
        }
        CliAction::SampleUsage => {
            composition.sample_usage_usecase().execute();
            Ok(EXIT_OK)
        }
    }
}
