//! `calcdemo` 바이너리 진입점.

use calcdemo::interface::cli::{Cli, run_action};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 인자 오류/--help/--version은 clap이 출력과 종료 코드를 처리한다.
    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(err) => err.exit(),
    };

    match run_action(action) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
