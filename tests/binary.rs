use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// 사용자/프로젝트 설정이 섞이지 않도록 빈 디렉터리에서 바이너리를 실행한다.
fn calcdemo(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_calcdemo"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .env_remove("CALCDEMO_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    calcdemo(dir.path()).args(args).output().unwrap()
}

#[test]
fn calc_add_prints_result_on_stdout() {
    let output = run(&["calc", "add", "2", "3"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5.0\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn calc_division_by_zero_reports_on_stderr() {
    let output = run(&["calc", "div", "10", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Error: division by zero\n"
    );
}

#[test]
fn piped_repl_ends_on_end_of_input() {
    let dir = TempDir::new().unwrap();
    let mut child = calcdemo(dir.path())
        .arg("interactive")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    {
        use std::io::Write;
        let mut stdin = child.stdin.take().unwrap();
        stdin.write_all(b"add 1 2\ndiv 1 0\n").unwrap();
    }
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Calculator REPL. Type 'quit' or 'exit' to stop.\n\
         calc> 3.0\n\
         calc> Error: division by zero\n\
         calc> \n"
    );
}

#[cfg(unix)]
#[test]
fn interrupt_ends_plain_repl_with_newline_and_exit_zero() {
    use std::io::{BufRead, BufReader, Read};

    let dir = TempDir::new().unwrap();
    let mut child = calcdemo(dir.path())
        .arg("interactive")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    // 열린 채로 유지해야 EOF가 아닌 신호로 종료되는지 확인할 수 있다.
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    // 배너가 보이면 핸들러 설치가 끝난 상태다.
    let mut banner = String::new();
    stdout.read_line(&mut banner).unwrap();
    assert_eq!(banner, "Calculator REPL. Type 'quit' or 'exit' to stop.\n");

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = child.wait().unwrap();
    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(rest.ends_with('\n'), "stdout after banner: {rest:?}");
}
