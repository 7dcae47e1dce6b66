//! `CommandExecutor` 포트 구현체.
//! - `ProcessExecutor`: 토큰을 외부 명령으로 실행
//! - `ChannelExecutor`: 다른 태스크로 요청을 넘기고 응답을 기다림

mod channel;
mod process;

pub use channel::{ChannelExecutor, CommandReceiver, CommandRequest, command_channel};
pub use process::ProcessExecutor;
