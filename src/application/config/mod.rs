//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 매 read 직전에 출력할 프롬프트
    pub prompt: Option<String>,
    /// `RUST_LOG`가 없을 때 사용할 tracing 필터
    pub log_filter: Option<String>,
    /// executor 실행 설정
    #[serde(default)]
    pub executor: ExecutorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ExecutorConfig {
    /// 모든 토큰 시퀀스 앞에 붙일 프로그램/인자
    pub command_prefix: Option<Vec<String>>,
    /// 루프 태스크와 executor 태스크 사이 채널 크기
    pub channel_capacity: Option<usize>,
}

impl Config {
    pub fn prompt(&self) -> String {
        self.prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn log_filter(&self) -> String {
        self.log_filter
            .clone()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    pub fn command_prefix(&self) -> Vec<String> {
        self.executor.command_prefix.clone().unwrap_or_default()
    }

    /// 0은 mpsc 채널에서 허용되지 않으므로 최소 1로 보정한다.
    pub fn channel_capacity(&self) -> usize {
        self.executor
            .channel_capacity
            .unwrap_or(DEFAULT_CHANNEL_CAPACITY)
            .max(1)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.log_filter.is_some() {
            self.log_filter = other.log_filter;
        }
        self.executor.merge_from(other.executor);
    }
}

impl ExecutorConfig {
    pub(crate) fn merge_from(&mut self, other: ExecutorConfig) {
        if other.command_prefix.is_some() {
            self.command_prefix = other.command_prefix;
        }
        if other.channel_capacity.is_some() {
            self.channel_capacity = other.channel_capacity;
        }
    }
}
