//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use crate::application::config::Config;
use crate::application::ports::{CommandExecutor, ConfigRepository};
use crate::application::usecases::command_loop::CommandLoop;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::domain::command::LoopSummary;
use crate::infrastructure::adapters::JsonConfigRepository;
use crate::infrastructure::executor::{ProcessExecutor, command_channel};
use crate::interface::cli::command::RunOptions;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
#[derive(Debug, Clone, Default)]
pub struct AppComposition {
    config_repo: JsonConfigRepository,
}

impl AppComposition {
    pub fn new(options: &RunOptions) -> Self {
        Self {
            config_repo: JsonConfigRepository::new(options.config.clone(), options.overrides()),
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 설정 파일을 병합한 뒤 CLI 옵션을 최우선으로 덮어쓴 최종 설정.
    pub fn load_config(&self) -> Result<Config> {
        self.config_repo.load()
    }

    pub fn process_executor(&self, config: &Config) -> Arc<dyn CommandExecutor> {
        Arc::new(ProcessExecutor::new(config.command_prefix()))
    }

    /// 루프는 전용 태스크에서, `executor`는 현재 태스크에서 채널 요청을 처리하며 실행한다.
    /// 루프가 끝나면 채널 송신 측이 닫혀 수신 측도 함께 종료된다.
    pub async fn run_session<R, W>(
        &self,
        config: &Config,
        reader: R,
        prompt_out: W,
        executor: Arc<dyn CommandExecutor>,
    ) -> Result<LoopSummary>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (channel_executor, receiver) = command_channel(config.channel_capacity());
        let handle = CommandLoop::new(reader, prompt_out, Arc::new(channel_executor))
            .with_prompt(config.prompt())
            .spawn();

        let served = receiver.serve(executor).await;
        let summary = handle.await.context("command loop task failed")?;
        debug!(served, iterations = summary.iterations, "command session finished");

        Ok(summary)
    }
}
