use apo_cli::{Cli, DEFAULT_LOG_FILTER, EXIT_UNEXPECTED, SERVICE_NAME, diagnostic, exit_code, run};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = apo_telemetry::init_telemetry_with_default(SERVICE_NAME, DEFAULT_LOG_FILTER) {
        eprintln!("Unexpected error: failed to initialize logging: {e}");
        return ExitCode::from(EXIT_UNEXPECTED);
    }

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", diagnostic(&err));
            ExitCode::from(exit_code(&err))
        }
    }
}
