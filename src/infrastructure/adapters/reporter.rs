//! 콘솔 리포터 포트 구현 어댑터.

use crate::application::ports::Reporter;

/// 결과는 stdout, 오류는 stderr로 보내는 리포터.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn raw(&self, line: &str) {
        println!("{}", line);
    }

    fn error(&self, line: &str) {
        eprintln!("{}", line);
    }
}
