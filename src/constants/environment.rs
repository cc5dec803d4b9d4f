use log::LevelFilter;

pub const DATA_DIR_VAR: &str = "HOTELBOOK_DATA_DIR";
pub const LOG_LEVEL_VAR: &str = "HOTELBOOK_LOG";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
