//! 출력/입력 정책(결과 표기, 종료 명령 판정).

/// 소수 자릿수 설정의 상한.
pub const MAX_PRECISION: usize = 17;

/// 계산 결과를 표시용 문자열로 만든다.
/// 자릿수가 없으면 왕복 가능한 최단 표기(`5.0`, `3.5`, `inf`, `NaN`)를 쓴다.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => {
            let digits = digits.min(MAX_PRECISION);
            format!("{value:.digits$}")
        }
        None => format!("{value:?}"),
    }
}

/// `quit`/`exit`(대소문자 무시)인지 판정한다.
pub fn is_exit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_shortest() {
        assert_eq!(format_number(5.0, None), "5.0");
        assert_eq!(format_number(3.5, None), "3.5");
        assert_eq!(format_number(-0.0, None), "-0.0");
        assert_eq!(format_number(0.1 + 0.2, None), "0.30000000000000004");
        assert_eq!(format_number(f64::INFINITY, None), "inf");
        assert_eq!(format_number(f64::NAN, None), "NaN");
    }

    #[test]
    fn test_format_number_with_precision() {
        assert_eq!(format_number(2.0 / 3.0, Some(4)), "0.6667");
        assert_eq!(format_number(5.0, Some(0)), "5");
        assert_eq!(
            format_number(1.0, Some(100)),
            format!("{:.*}", MAX_PRECISION, 1.0)
        );
    }

    #[test]
    fn test_is_exit_command() {
        assert!(is_exit_command("quit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("  Quit "));
        assert!(!is_exit_command("quit now"));
        assert!(!is_exit_command("q"));
    }
}
