//Vendor Imports
#[macro_use]
extern crate log;
extern crate simplelog;
use simplelog::{ColorChoice, CombinedLogger, Config as LogConfig, TermLogger, TerminalMode};
use std::process;

//Application Imports
use hotelbooklib::config::Config;
use hotelbooklib::io::FileStorage;
use hotelbooklib::self_check::SelfCheck;

fn main() {
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Unable to configure: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = CombinedLogger::init(vec![TermLogger::new(
        config.log_level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to start logging: {}", e);
    }

    let storage = FileStorage::new(&config.data_dir);
    info!("Running self check in {}", storage.data_dir().display());

    match SelfCheck::new(storage).run() {
        Ok(passed) => info!("All {} checks passed", passed),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
