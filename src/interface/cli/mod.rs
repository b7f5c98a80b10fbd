//! CLI 인터페이스 모듈 묶음.
//! 인자 파싱/라우팅/REPL/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod dispatch;
pub mod repl;
pub mod repl_input;

pub use command::{Cli, CliAction};
pub use composition::AppComposition;
pub use dispatch::{execute_action, run_action};
pub use repl::run_repl;
