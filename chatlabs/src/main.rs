mod config;
mod error;
mod labs;
mod options;
mod prompts;
mod report;
mod style;
mod toml_parser;
mod tools;
mod util;

use error::AppError;
use options::Options;
use config::Config;

fn run_labs() -> Result<(), AppError> {
    let options = Options::load(std::env::args())?;
    let config: Config = options.try_into()?;

    labs::run_lab(&config)
}

fn main() {
    if let Err(e) = run_labs() {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
