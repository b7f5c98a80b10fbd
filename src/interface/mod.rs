//! Interface layer
//! 사용자 입력(CLI 인자/REPL)을 유스케이스 호출로 변환한다.

pub mod cli;
