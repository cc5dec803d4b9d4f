use hotelbooklib::io::FileStorage;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use tempfile::TempDir;

/// Every test in a binary calls this, only the first one gets to install the logger
pub fn _init_logging() {
    let _ = CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

/// The TempDir must be kept alive for as long as the storage is used
pub fn _create_file_storage() -> Result<(TempDir, FileStorage), Box<dyn std::error::Error>> {
    _init_logging();

    let tmp = TempDir::new()?;
    let storage = FileStorage::new(tmp.path());
    Ok((tmp, storage))
}
