//! `cmdloop` 바이너리 진입점.

use cmdloop::domain::command::LoopExit;
use cmdloop::interface::cli::{AppComposition, Cli, CliAction, logging};

#[tokio::main]
async fn main() {
    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    // 설정 로딩 로그도 보이도록 설정보다 먼저 초기화한다.
    let log_filter = logging::init();

    match action {
        CliAction::InspectConfig(options) => match cmdloop::inspect_config_pretty_json(&options) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Run(options) => {
            let composition = AppComposition::new(&options);
            let config = match composition.load_config() {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            };
            log_filter.apply_config_filter(&config.log_filter());

            match cmdloop::run_stdio(&composition, &config).await {
                Ok(summary) => {
                    if let LoopExit::StreamFault(_) = summary.exit {
                        std::process::exit(1);
                    }
                }
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
    }
}
