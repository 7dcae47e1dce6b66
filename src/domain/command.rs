//! 명령 줄/토큰/루프 상태 도메인 모델.

use std::fmt;
use std::io;

/// 입력 스트림에서 읽은 한 줄(줄바꿈 제거됨).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    text: String,
}

impl CommandLine {
    /// 원본 줄에서 끝의 줄바꿈(`\n`, `\r\n`, `\r`)만 제거한다.
    pub fn from_raw(raw: &str) -> Self {
        let text = raw
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .or_else(|| raw.strip_suffix('\r'))
            .unwrap_or(raw);

        Self {
            text: text.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 공백 문자 하나를 구분자로 토큰 시퀀스를 만든다.
    pub fn tokens(&self) -> Vec<String> {
        tokenize(&self.text)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// 리터럴 `' '` 기준 분할.
/// 앞뒤 공백을 자르지 않고 연속 공백도 병합하지 않으므로 빈 토큰이 생길 수 있다.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(' ').map(str::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// 입력 대기(블로킹 read)
    AwaitingInput,
    /// executor 호출 중
    Dispatching,
    /// 종료(스트림 종료 또는 스트림 오류)
    Stopped,
}

/// 루프 종료 사유.
#[derive(Debug)]
pub enum LoopExit {
    EndOfStream,
    StreamFault(io::Error),
}

impl LoopExit {
    pub fn is_fault(&self) -> bool {
        matches!(self, LoopExit::StreamFault(_))
    }
}

/// `run()` 종료 시점의 집계.
#[derive(Debug)]
pub struct LoopSummary {
    /// 출력한 프롬프트 수(= read 시도 수)
    pub iterations: usize,
    pub dispatched: usize,
    pub dispatch_faults: usize,
    pub exit: LoopExit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_single_spaced_words_in_order() {
        assert_eq!(tokenize("book room 12"), vec!["book", "room", "12"]);
    }

    #[test]
    fn keeps_empty_token_between_double_spaces() {
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_line_is_single_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn leading_and_trailing_spaces_are_not_trimmed() {
        assert_eq!(tokenize(" a "), vec!["", "a", ""]);
    }

    #[test]
    fn tabs_are_not_delimiters() {
        assert_eq!(tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn strips_line_terminators_only() {
        assert_eq!(CommandLine::from_raw("foo bar\n").as_str(), "foo bar");
        assert_eq!(CommandLine::from_raw("foo bar\r\n").as_str(), "foo bar");
        assert_eq!(CommandLine::from_raw("foo\r").as_str(), "foo");
        assert_eq!(CommandLine::from_raw("foo ").as_str(), "foo ");
        assert_eq!(CommandLine::from_raw("\n").tokens(), vec![""]);
    }

    #[test]
    fn carriage_return_inside_a_line_is_kept() {
        let line = CommandLine::from_raw("a\rb\n");
        assert_eq!(line.tokens(), vec!["a\rb"]);
    }

    #[test]
    fn stream_fault_exit_is_fault() {
        assert!(LoopExit::StreamFault(io::Error::other("boom")).is_fault());
        assert!(!LoopExit::EndOfStream.is_fault());
    }
}
