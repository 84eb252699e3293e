use std::process::ExitCode;

use clap::Parser;

use visit_badge::cli::{Cli, Commands};
use visit_badge::config::init_config;
use visit_badge::errors::BadgeError;
use visit_badge::runtime::modes;
use visit_badge::system::logging::init_logging;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());
    let command = cli.command.unwrap_or(Commands::Serve);

    // 只有服务器模式需要日志系统，CLI 命令直接输出到终端
    let _guard = if command == Commands::Serve {
        match init_logging(&config.logging) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    match modes::run_cli(command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<BadgeError>() {
                Some(err) => eprintln!("{}", err.format_colored()),
                None => eprintln!("[ERROR] {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
