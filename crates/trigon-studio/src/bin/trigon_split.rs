use std::process::ExitCode;

use trigon_engine::logging::{LoggingConfig, init_logging};
use trigon_engine::report::report_fatal;
use trigon_studio::shaders;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match trigon_studio::run("Trigon (split shaders)", shaders::SPLIT) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
