use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::Result;
use calcdemo::application::config::Config;
use calcdemo::application::ports::{LineInput, Reporter};
use calcdemo::domain::Calculator;
use calcdemo::interface::cli::repl::{BANNER, OPERAND_HINT, UNKNOWN_OP_HINT, USAGE_HINT};
use calcdemo::interface::cli::run_repl;

#[derive(Default)]
struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for Transcript {
    fn raw(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }

    fn error(&self, line: &str) {
        self.lines.lock().unwrap().push(format!("stderr: {line}"));
    }
}

struct Script(VecDeque<&'static str>);

impl LineInput for Script {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.0.pop_front().map(str::to_string))
    }
}

fn session(lines: &[&'static str]) -> Vec<String> {
    let transcript = Transcript::default();
    let mut script = Script(lines.iter().copied().collect());
    run_repl(&Calculator, &transcript, &mut script, &Config::default()).unwrap();
    transcript.lines()
}

#[test]
fn repl_prints_results_and_recovers_from_errors() {
    let out = session(&["add 1 2", "div 1 0", "add 1", "mul 2.5 4", "quit"]);

    assert_eq!(
        out,
        vec![
            BANNER,
            "3.0",
            "Error: division by zero",
            USAGE_HINT,
            "10.0",
        ]
    );
}

#[test]
fn repl_rejects_unknown_operation_and_bad_operands() {
    let out = session(&["mod 5 2", "sub five 2", "sub 5 2", "exit"]);

    assert_eq!(out, vec![BANNER, UNKNOWN_OP_HINT, OPERAND_HINT, "3.0"]);
}

#[test]
fn repl_ends_on_end_of_input_with_newline() {
    let out = session(&["", "div 9 3"]);

    assert_eq!(out, vec![BANNER, "3.0", ""]);
}
