//! 입력 스트림에서 명령 줄을 읽어 executor로 전달하는 read-dispatch 루프.
//!
//! 오류 정책은 두 갈래로 나뉜다.
//! - dispatch 실패: 실패한 줄과 함께 로그만 남기고 다음 프롬프트로 진행한다.
//! - 스트림 오류: 로그를 남기고 루프를 영구 종료한다.
//!
//! 스트림 종료(EOF)는 오류가 아닌 정상 종료로 취급한다.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::application::config::DEFAULT_PROMPT;
use crate::application::ports::CommandExecutor;
use crate::domain::command::{CommandLine, LoopExit, LoopState, LoopSummary};

/// `read_once` 한 번의 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Dispatched,
    /// executor가 실패했지만 루프는 계속된다.
    DispatchFailed,
    EndOfStream,
}

pub struct CommandLoop<R, W> {
    reader: R,
    prompt_out: W,
    prompt: String,
    executor: Arc<dyn CommandExecutor>,
    /// 상태 전이를 외부(executor 포함)에서 관찰할 수 있도록 발행한다.
    state: watch::Sender<LoopState>,
}

impl<R, W> CommandLoop<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, prompt_out: W, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            reader,
            prompt_out,
            prompt: DEFAULT_PROMPT.to_string(),
            executor,
            state: watch::Sender::new(LoopState::AwaitingInput),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn state(&self) -> LoopState {
        *self.state.borrow()
    }

    /// 상태 전이 구독. dispatch 도중에도 `Dispatching`을 읽을 수 있다.
    pub fn subscribe(&self) -> watch::Receiver<LoopState> {
        self.state.subscribe()
    }

    fn set_state(&self, state: LoopState) {
        self.state.send_replace(state);
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.prompt_out)
    }

    /// 한 줄을 읽어 토큰화한 뒤 executor에 넘긴다.
    /// 읽기 자체의 I/O 오류만 `Err`로 전파한다.
    pub async fn read_once(&mut self) -> io::Result<ReadOutcome> {
        let mut raw = String::new();
        let read = self.reader.read_line(&mut raw).await?;
        if read == 0 {
            return Ok(ReadOutcome::EndOfStream);
        }

        let line = CommandLine::from_raw(&raw);
        let tokens = line.tokens();

        self.set_state(LoopState::Dispatching);
        debug!(tokens = tokens.len(), "dispatching command");
        let result = self.executor.execute(&tokens).await;
        self.set_state(LoopState::AwaitingInput);

        match result {
            Ok(()) => Ok(ReadOutcome::Dispatched),
            Err(err) => {
                error!(reason = %format!("{err:#}"), "execute command {line} failed");
                Ok(ReadOutcome::DispatchFailed)
            }
        }
    }

    /// 스트림이 닫히거나 실패할 때까지 프롬프트 출력 → read → dispatch를 반복한다.
    pub async fn run(&mut self) -> LoopSummary {
        let mut iterations = 0;
        let mut dispatched = 0;
        let mut dispatch_faults = 0;

        let exit = loop {
            self.set_state(LoopState::AwaitingInput);

            let outcome = match self.write_prompt().await {
                Ok(()) => {
                    iterations += 1;
                    self.read_once().await
                }
                Err(err) => Err(err),
            };

            match outcome {
                Ok(ReadOutcome::Dispatched) => dispatched += 1,
                Ok(ReadOutcome::DispatchFailed) => {
                    dispatched += 1;
                    dispatch_faults += 1;
                }
                Ok(ReadOutcome::EndOfStream) => {
                    info!(iterations, "input stream closed");
                    break LoopExit::EndOfStream;
                }
                Err(err) => {
                    error!("read command failed: {err}");
                    break LoopExit::StreamFault(err);
                }
            }
        };

        self.set_state(LoopState::Stopped);
        LoopSummary {
            iterations,
            dispatched,
            dispatch_faults,
            exit,
        }
    }

    async fn write_prompt(&mut self) -> io::Result<()> {
        self.prompt_out.write_all(self.prompt.as_bytes()).await?;
        self.prompt_out.flush().await
    }
}

impl<R, W> CommandLoop<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// 루프를 전용 tokio 태스크로 옮겨 실행한다.
    pub fn spawn(mut self) -> JoinHandle<LoopSummary> {
        tokio::spawn(async move { self.run().await })
    }
}
