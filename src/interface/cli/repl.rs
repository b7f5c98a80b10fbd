//! 대화형 계산 쉘(REPL) 인터페이스.
//!
//! 한 줄에 `<op> <a> <b>` 하나를 읽어 결과나 안내 한 줄을 출력한다.
//! 입력 오류는 출력 후 다음 줄을 계속 읽고, 종료 명령/EOF/인터럽트에서만 끝난다.

use std::borrow::Cow;

use anyhow::Result;
use tracing::debug;

use crate::application::config::Config;
use crate::application::ports::{Evaluator, LineInput, Reporter};
use crate::domain::policy::{format_number, is_exit_command};
use crate::domain::{CalcError, CalculationRequest};

pub const BANNER: &str = "Calculator REPL. Type 'quit' or 'exit' to stop.";
pub const USAGE_HINT: &str = "Usage: <op> <a> <b>   e.g. add 1 2";
pub const UNKNOWN_OP_HINT: &str = "Unknown op. Use add|sub|mul|div";
pub const OPERAND_HINT: &str = "Operands must be numbers.";

enum ReplCommand<'a> {
    Skip,
    Exit,
    Evaluate(&'a str),
}

/// 입력이 끝날 때까지 한 줄씩 읽고 평가한다.
pub fn run_repl(
    evaluator: &dyn Evaluator,
    reporter: &dyn Reporter,
    input: &mut dyn LineInput,
    config: &Config,
) -> Result<()> {
    if config.banner_enabled() {
        reporter.raw(BANNER);
    }
    let precision = config.precision();

    loop {
        let Some(raw_input) = input.read_line(config.prompt())? else {
            // EOF: 프롬프트 뒤 줄바꿈만 남기고 종료한다.
            reporter.raw("");
            break;
        };

        match parse_repl_command(&raw_input) {
            ReplCommand::Skip => continue,
            ReplCommand::Exit => break,
            ReplCommand::Evaluate(line) => {
                let outcome = CalculationRequest::parse(line)
                    .and_then(|request| evaluator.evaluate(&request));
                let message = match outcome {
                    Ok(value) => Cow::Owned(format_number(value, precision)),
                    Err(err) => {
                        debug!(%err, "repl input failed");
                        describe_error(&err)
                    }
                };
                reporter.raw(&message);
            }
        }
    }

    Ok(())
}

fn parse_repl_command(raw_input: &str) -> ReplCommand<'_> {
    let input = raw_input.trim();
    if input.is_empty() {
        return ReplCommand::Skip;
    }
    if is_exit_command(input) {
        return ReplCommand::Exit;
    }
    ReplCommand::Evaluate(input)
}

/// 입력 형식 오류는 고정 안내문으로, 계산 오류는 `Error: <message>`로 바꾼다.
fn describe_error(err: &CalcError) -> Cow<'static, str> {
    match err {
        CalcError::MalformedCommand(_) => Cow::Borrowed(USAGE_HINT),
        CalcError::UnknownOperation(_) => Cow::Borrowed(UNKNOWN_OP_HINT),
        CalcError::MalformedOperand(_) => Cow::Borrowed(OPERAND_HINT),
        CalcError::DivisionByZero => Cow::Owned(format!("Error: {err}")),
    }
}
