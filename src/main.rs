use std::process::ExitCode;
use warehouse_replay::{create_clap_command, handle_clap_matches, logging, playback};

fn main() -> ExitCode {
    let matches = create_clap_command().get_matches();
    let config = match handle_clap_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init_logging(config.verbose, config.log_file.as_deref()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match playback::run(&config) {
        Ok(report) => {
            log::debug!("{report:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
