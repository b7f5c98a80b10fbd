//! REPL 입력 처리기.
//! TTY에서는 줄 편집기로 연산 추천과 실시간 힌트를 표시하고,
//! 그 외에는 일반 라인 입력으로 동작한다.

use std::env;
use std::io::{self, IsTerminal, Write};
#[cfg(unix)]
use std::{process, thread};

#[cfg(unix)]
use anyhow::Context;
use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::ports::LineInput;
use crate::domain::policy::is_exit_command;
use crate::domain::{CalcError, CalculationRequest, Operation};

struct Suggestion {
    name: &'static str,
    description: &'static str,
    usage: &'static str,
}

static SUGGESTIONS: [Suggestion; 6] = [
    Suggestion {
        name: "add",
        description: "a + b",
        usage: "add <a> <b>",
    },
    Suggestion {
        name: "sub",
        description: "a - b",
        usage: "sub <a> <b>",
    },
    Suggestion {
        name: "mul",
        description: "a * b",
        usage: "mul <a> <b>",
    },
    Suggestion {
        name: "div",
        description: "a / b (b != 0)",
        usage: "div <a> <b>",
    },
    Suggestion {
        name: "quit",
        description: "leave the REPL",
        usage: "quit",
    },
    Suggestion {
        name: "exit",
        description: "leave the REPL",
        usage: "exit",
    },
];

/// 표준 입력 기반 `LineInput` 구현.
/// - TTY + 지원 터미널 + 설정 허용: 줄 편집기
/// - 그 외: 일반 라인 입력
pub struct TerminalInput {
    line_editor: bool,
}

impl TerminalInput {
    pub fn new(line_editor: bool) -> Self {
        Self { line_editor }
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if !self.line_editor || !supports_interactive_input() {
            return read_line_fallback(prompt);
        }

        match read_line_interactive(prompt) {
            Ok(v) => Ok(v),
            Err(err) => {
                debug!(error = %err, "line editor failed, falling back to plain input");
                read_line_fallback(prompt)
            }
        }
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(trim_newline(line))),
        Err(err) => Err(err.into()),
    }
}

/// SIGINT를 받으면 줄바꿈을 출력하고 종료 코드 0으로 끝낸다.
/// 블로킹된 `read_line`은 EINTR을 재시도하므로 별도 스레드에서 신호를 기다린다.
/// 줄 편집기는 raw 모드에서 Ctrl-C를 키 입력으로 받으므로 이 경로를 타지 않는다.
#[cfg(unix)]
pub fn exit_on_interrupt() -> Result<()> {
    use signal_hook::consts::signal::SIGINT;
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT]).context("failed to install SIGINT handler")?;
    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            debug!(signal, "interrupt received, leaving REPL");
            let mut stdout = io::stdout();
            let _ = writeln!(stdout);
            let _ = stdout.flush();
            process::exit(0);
        }
    });
    Ok(())
}

#[cfg(not(unix))]
pub fn exit_on_interrupt() -> Result<()> {
    Ok(())
}

fn read_line_interactive(prompt: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter()?;

    let mut input = String::new();
    let mut cursor_chars = 0usize;
    let mut selected_idx = 0usize;

    loop {
        let suggestions = match_suggestions(&input);
        if suggestions.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= suggestions.len() {
            selected_idx = suggestions.len() - 1;
        }

        render_frame(
            &mut stdout,
            prompt,
            &input,
            cursor_chars,
            &suggestions,
            selected_idx,
        )?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_frame(&mut stdout, prompt, &input, true)?;
                        return Ok(Some(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Up => {
                        selected_idx = selected_idx.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if !suggestions.is_empty() {
                            selected_idx = (selected_idx + 1).min(suggestions.len() - 1);
                        }
                    }
                    KeyCode::Tab => {
                        if let Some(completed) = complete_input(&suggestions, selected_idx) {
                            input = completed;
                            cursor_chars = input.chars().count();
                        }
                    }
                    // Ctrl-D(EOF)와 Ctrl-C(인터럽트)는 모두 입력 종료로 취급한다.
                    KeyCode::Char('d' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_frame(&mut stdout, prompt, &input, false)?;
                        return Ok(None);
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// 첫 토큰을 입력하는 동안에만 접두사가 맞는 명령을 추천한다.
fn match_suggestions(input: &str) -> Vec<&'static Suggestion> {
    let query = input.trim_start();
    if query.is_empty() || query.contains(char::is_whitespace) {
        return Vec::new();
    }

    SUGGESTIONS
        .iter()
        .filter(|s| s.name.starts_with(query))
        .collect()
}

/// 선택된 추천으로 첫 토큰을 완성한다. 연산이면 피연산자 입력을 위해 공백을 붙인다.
fn complete_input(suggestions: &[&Suggestion], selected_idx: usize) -> Option<String> {
    let item = suggestions.get(selected_idx)?;
    if item.name.parse::<Operation>().is_ok() {
        Some(format!("{} ", item.name))
    } else {
        Some(item.name.to_string())
    }
}

/// 현재 입력을 Enter 했을 때의 결과를 미리 알려준다.
fn realtime_hint(input: &str) -> Option<(Color, String)> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if is_exit_command(trimmed) {
        return Some((Color::Green, "ready: press Enter to leave".to_string()));
    }

    match CalculationRequest::parse(trimmed) {
        Ok(request) => Some((
            Color::Green,
            format!(
                "ready: {} {} {}",
                request.lhs,
                request.op.symbol(),
                request.rhs
            ),
        )),
        Err(CalcError::MalformedCommand(count)) if count < 3 => {
            let first = trimmed.split_whitespace().next().unwrap_or_default();
            match first.parse::<Operation>() {
                Ok(op) => Some((Color::Yellow, format!("hint: {op} <a> <b>"))),
                Err(_) if count == 1 && !match_suggestions(first).is_empty() => {
                    Some((Color::Yellow, "hint: <op> <a> <b>".to_string()))
                }
                Err(err) => Some((Color::Red, format!("error: {err}"))),
            }
        }
        Err(err) => Some((Color::Red, format!("error: {err}"))),
    }
}

fn render_frame(
    stdout: &mut io::Stdout,
    prompt: &str,
    input: &str,
    cursor_chars: usize,
    suggestions: &[&Suggestion],
    selected_idx: usize,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((80, 24));
    // 마지막 열에 쓰면 자동 줄바꿈되는 터미널이 있어 한 칸을 남긴다.
    let width = (w as usize).max(20) - 1;

    queue!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        Print(prompt),
        Print(render_input(prompt, input, width))
    )?;

    // 입력줄 아래에 힌트와 추천을 그리고 커서를 입력줄로 되돌린다.
    let mut rows_below: u16 = 0;

    if let Some((color, line)) = realtime_hint(input) {
        queue!(
            stdout,
            Print("\r\n"),
            SetForegroundColor(color),
            Print(clip_line_display(&line, width)),
            ResetColor
        )?;
        rows_below += 1;
    }

    for (idx, item) in suggestions.iter().enumerate() {
        let (marker, color) = if idx == selected_idx {
            (">", Color::Cyan)
        } else {
            (" ", Color::DarkGrey)
        };
        let line = format!(
            "{marker} {:<5} - {} | usage: {}",
            item.name, item.description, item.usage
        );
        queue!(
            stdout,
            Print("\r\n"),
            SetForegroundColor(color),
            Print(clip_line_display(&line, width)),
            ResetColor
        )?;
        rows_below += 1;
    }

    if rows_below > 0 {
        queue!(stdout, cursor::MoveUp(rows_below))?;
    }

    let col = prompt_cursor_col(prompt, input, cursor_chars, width) as u16;
    queue!(stdout, cursor::MoveToColumn(col))?;
    stdout.flush()?;
    Ok(())
}

/// 힌트 영역을 지우고 입력줄을 전체 내용으로 확정한다.
fn finish_frame(stdout: &mut io::Stdout, prompt: &str, input: &str, newline: bool) -> Result<()> {
    queue!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::FromCursorDown),
        Print(prompt),
        Print(input)
    )?;
    if newline {
        queue!(stdout, Print("\r\n"))?;
    }
    stdout.flush()?;
    Ok(())
}

fn render_input(prompt: &str, input: &str, width: usize) -> String {
    let available = width.saturating_sub(display_width(prompt));
    tail_with_ellipsis_display(input, available)
}

fn prompt_cursor_col(prompt: &str, input: &str, cursor_chars: usize, width: usize) -> usize {
    let prefix_width = display_width(prompt);
    let available = width.saturating_sub(prefix_width);

    if display_width(input) <= available {
        let before_cursor: String = input.chars().take(cursor_chars).collect();
        return (prefix_width + display_width(&before_cursor)).min(width);
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    (prefix_width + display_width(&tail_with_ellipsis_display(input, available))).min(width)
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn clip_line_display(line: &str, max_width: usize) -> String {
    if display_width(line) <= max_width {
        return line.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0usize;
    let cap = max_width - 3;

    for ch in line.chars() {
        let cw = char_display_width(ch);
        if used + cw > cap {
            break;
        }
        out.push(ch);
        used += cw;
    }

    out.push_str("...");
    out
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

// unicode-width 크레이트로 터미널 표시 폭을 계산한다.
fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, ResetColor, cursor::Show);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
