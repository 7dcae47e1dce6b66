//! 루프 태스크와 실제 executor 태스크를 메시지 채널로 분리하는 executor.
//!
//! 요청마다 oneshot 응답을 기다리므로 루프 입장에서 dispatch는 여전히 동기적이다.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::application::ports::CommandExecutor;

/// 채널을 통해 전달되는 dispatch 요청.
#[derive(Debug)]
pub struct CommandRequest {
    pub tokens: Vec<String>,
    reply: oneshot::Sender<Result<()>>,
}

impl CommandRequest {
    /// 실행 결과를 루프 쪽에 돌려준다. 루프가 이미 사라졌으면 무시한다.
    pub fn respond(self, result: Result<()>) {
        let _ = self.reply.send(result);
    }
}

/// 송신 측. 루프에 `CommandExecutor`로 주입된다.
#[derive(Debug, Clone)]
pub struct ChannelExecutor {
    tx: mpsc::Sender<CommandRequest>,
}

/// 수신 측. 다른 태스크에서 요청을 꺼내 처리한다.
#[derive(Debug)]
pub struct CommandReceiver {
    rx: mpsc::Receiver<CommandRequest>,
}

pub fn command_channel(capacity: usize) -> (ChannelExecutor, CommandReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelExecutor { tx }, CommandReceiver { rx })
}

#[async_trait]
impl CommandExecutor for ChannelExecutor {
    async fn execute(&self, tokens: &[String]) -> Result<()> {
        let (reply, response) = oneshot::channel();
        let request = CommandRequest {
            tokens: tokens.to_vec(),
            reply,
        };

        self.tx
            .send(request)
            .await
            .map_err(|_| anyhow!("command receiver is closed"))?;

        response
            .await
            .map_err(|_| anyhow!("command receiver dropped the request"))?
    }
}

impl CommandReceiver {
    pub async fn recv(&mut self) -> Option<CommandRequest> {
        self.rx.recv().await
    }

    /// 모든 송신 측이 닫힐 때까지 요청을 `executor`로 넘기고 처리한 요청 수를 반환한다.
    pub async fn serve(mut self, executor: Arc<dyn CommandExecutor>) -> usize {
        let mut served = 0;
        while let Some(request) = self.rx.recv().await {
            let result = executor.execute(&request.tokens).await;
            request.respond(result);
            served += 1;
        }
        served
    }
}
