//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::config::{Config, ExecutorConfig};

#[derive(Debug, Parser)]
#[command(name = "cmdloop")]
#[command(about = "Read command lines from stdin and dispatch them to an executor")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Prompt printed before each read (default "> ")
    #[arg(long)]
    prompt: Option<String>,

    /// Extra config file, merged with the highest priority
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Program and arguments prepended to every command line
    #[arg(last = true)]
    prefix: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config
    Config,
}

/// 설정 파일 위에 덮어쓸 CLI 실행 옵션.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub prompt: Option<String>,
    pub config: Option<PathBuf>,
    pub command_prefix: Option<Vec<String>>,
}

impl RunOptions {
    /// 설정 파일 병합 결과 위에 덮어쓸 값만 채운 설정.
    pub fn overrides(&self) -> Config {
        Config {
            prompt: self.prompt.clone(),
            log_filter: None,
            executor: ExecutorConfig {
                command_prefix: self.command_prefix.clone(),
                channel_capacity: None,
            },
        }
    }
}

/// `config`도 실행과 같은 옵션을 받아, 실제 실행에 적용될 값을 보여준다.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Run(RunOptions),
    InspectConfig(RunOptions),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        if self.prefix.first().is_some_and(|p| p.trim().is_empty()) {
            return Err("command prefix program must not be empty".to_string());
        }

        let options = RunOptions {
            prompt: self.prompt,
            config: self.config,
            command_prefix: (!self.prefix.is_empty()).then_some(self.prefix),
        };

        match self.command {
            Some(Commands::Config) => Ok(CliAction::InspectConfig(options)),
            None => Ok(CliAction::Run(options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> Result<CliAction, String> {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn no_arguments_runs_with_config_defaults() {
        assert_eq!(
            action(&["cmdloop"]).unwrap(),
            CliAction::Run(RunOptions::default())
        );
    }

    #[test]
    fn prompt_config_and_prefix_are_collected() {
        let parsed = action(&[
            "cmdloop",
            "--prompt",
            "hotel> ",
            "--config",
            "local.json",
            "--",
            "hotel",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(
            parsed,
            CliAction::Run(RunOptions {
                prompt: Some("hotel> ".to_string()),
                config: Some(PathBuf::from("local.json")),
                command_prefix: Some(vec!["hotel".to_string(), "--quiet".to_string()]),
            })
        );
    }

    #[test]
    fn config_subcommand_keeps_extra_path() {
        assert_eq!(
            action(&["cmdloop", "config", "--config", "x.json"]).unwrap(),
            CliAction::InspectConfig(RunOptions {
                config: Some(PathBuf::from("x.json")),
                ..RunOptions::default()
            })
        );
    }

    #[test]
    fn config_subcommand_keeps_run_overrides() {
        let parsed = action(&["cmdloop", "--prompt", "hotel> ", "config"]).unwrap();

        let CliAction::InspectConfig(options) = parsed else {
            panic!("expected config action");
        };
        let overrides = options.overrides();
        assert_eq!(overrides.prompt(), "hotel> ");
        assert!(overrides.executor.command_prefix.is_none());
        assert_eq!(overrides.log_filter, None);
    }

    #[test]
    fn blank_prefix_program_is_rejected() {
        assert!(action(&["cmdloop", "--", ""]).is_err());
    }
}
