//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 토큰 시퀀스를 해석/실행하는 외부 협력자 포트.
/// 실패는 루프에서 로그만 남기고 무시된다.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, tokens: &[String]) -> Result<()>;
}
