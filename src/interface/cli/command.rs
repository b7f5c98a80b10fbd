//! CLI 명령 파싱 모듈.

use std::ffi::OsString;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{CalculationRequest, Operation};

#[derive(Debug, Parser)]
#[command(name = "calcdemo", version)]
#[command(about = "Sample calculator demo")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run basic self-tests and exit
    #[arg(long)]
    test: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Perform a calculation
    #[command(allow_negative_numbers = true)]
    Calc {
        /// Operation
        op: OpArg,
        /// First operand
        a: f64,
        /// Second operand
        b: f64,
    },
    /// Start interactive REPL
    Interactive,
    /// Show effective merged config
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpArg {
    Add,
    Sub,
    Mul,
    Div,
}

impl From<OpArg> for Operation {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Add => Operation::Add,
            OpArg::Sub => Operation::Subtract,
            OpArg::Mul => Operation::Multiply,
            OpArg::Div => Operation::Divide,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    SelfTest,
    Calculate(CalculationRequest),
    Interactive,
    InspectConfig,
    SampleUsage,
}

impl Cli {
    /// 프로세스 인자를 해석한다. 실패 시 clap 오류(사용법 포함)를 그대로 돌려준다.
    pub fn parse_action() -> Result<CliAction, clap::Error> {
        Self::parse_action_from(std::env::args_os())
    }

    pub fn parse_action_from<I, T>(args: I) -> Result<CliAction, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Self::try_parse_from(args)?.into_action())
    }

    fn into_action(self) -> CliAction {
        // `--test`는 다른 모든 경로보다 우선한다.
        if self.test {
            return CliAction::SelfTest;
        }

        match self.command {
            Some(Commands::Calc { op, a, b }) => {
                CliAction::Calculate(CalculationRequest::new(op.into(), a, b))
            }
            Some(Commands::Interactive) => CliAction::Interactive,
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::SampleUsage,
        }
    }
}
