use std::process;

use log::error;

use nanoid_gen::app;
use nanoid_gen::errors::AppError;

fn main() {
    // Run the generator with error handling for critical failures
    if let Err(err) = app::run() {
        match &err {
            AppError::Generation(e) => error!("Critical generation error: {}", e),
            // The logger is not initialized yet at this point
            AppError::Config(e) => eprintln!("Critical configuration error: {}", e),
            AppError::Logger(e) => eprintln!("Critical logger error: {}", e),
            AppError::Output(e) => error!("Critical output error: {}", e),
        }
        process::exit(err.exit_code());
    }
}
