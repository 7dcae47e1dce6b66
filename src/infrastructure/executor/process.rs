//! 토큰 시퀀스를 로컬 프로세스로 실행하는 executor.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::CommandExecutor;
use crate::infrastructure::config::find_program;

/// `command_prefix ++ tokens`의 첫 요소를 프로그램, 나머지를 인자로 실행한다.
/// 자식 프로세스는 표준 입출력을 그대로 상속한다.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    prefix: Vec<String>,
}

impl ProcessExecutor {
    pub fn new(prefix: Vec<String>) -> Self {
        Self { prefix }
    }

    fn argv<'a>(&'a self, tokens: &'a [String]) -> Vec<&'a str> {
        self.prefix
            .iter()
            .chain(tokens)
            .map(String::as_str)
            .collect()
    }
}

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(&self, tokens: &[String]) -> Result<()> {
        let argv = self.argv(tokens);
        let Some((program, args)) = argv.split_first() else {
            bail!("empty command");
        };
        if program.is_empty() {
            bail!("empty command");
        }

        let Some(resolved) = find_program(program) else {
            bail!("command not found: {program}");
        };

        debug!(program = %resolved.display(), args = args.len(), "spawning command");
        let status = Command::new(&resolved)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("failed to run {program}"))?;

        if !status.success() {
            bail!("{program} exited with {status}");
        }
        Ok(())
    }
}
