//! cmdloop library root.
//! 표준 입력에서 명령 줄을 읽어 executor로 전달하는 루프를 계층별로 노출한다.

use anyhow::Result;
use tokio::io::BufReader;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::Config;
use domain::command::LoopSummary;
use interface::cli::{AppComposition, RunOptions};

/// 표준 입력/출력과 `ProcessExecutor`로 스트림이 닫힐 때까지 실행한다.
pub async fn run_stdio(composition: &AppComposition, config: &Config) -> Result<LoopSummary> {
    let executor = composition.process_executor(config);
    composition
        .run_session(
            config,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
            executor,
        )
        .await
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(options: &RunOptions) -> Result<String> {
    AppComposition::new(options).inspect_config_usecase().execute()
}
