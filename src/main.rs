use std::process::ExitCode;

use topsis::cli::{Cli, Invocation};
use topsis::commands::run::handle_run_command;
use topsis::config::Config;
use topsis::utils::error::{AppResult, report_error};
use topsis::utils::logging::init_tracing_subscriber;
use topsis::utils::output::configure_color;

fn main() -> ExitCode {
    configure_color(true);

    let result = Cli::parse_args(std::env::args_os()).and_then(|invocation| match invocation {
        Invocation::Info(text) => {
            print!("{text}");
            Ok(())
        }
        Invocation::Run(cli) => run(cli),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::warn!(error = ?err, "run aborted");
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    configure_color(config.output.color);
    init_tracing_subscriber(cli.debug, &config.logging.level);

    handle_run_command(&config, &cli.run, cli.summary)
}
