use std::env;
use std::fs::File;
use std::str::FromStr;

use dotenv::dotenv;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    _Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    _Io(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    /// Reads `RUST_LOG` and `LOG_FILE`, loading `.env` first when present.
    pub fn env() -> Self {
        dotenv().ok();

        Self::from_vars(env::var("RUST_LOG").ok(), env::var("LOG_FILE").ok())
    }

    fn from_vars(rust_log: Option<String>, log_file: Option<String>) -> Self {
        let log_level = rust_log
            .and_then(|l| LevelFilter::from_str(&l).ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            log_level,
            log_file: log_file.filter(|f| !f.is_empty()),
        }
    }

    /// Installs the global logger. Fails if one is already set.
    pub fn init_logger(&self) -> Result<()> {
        let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
        loggers.push(TermLogger::new(
            self.log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));

        if let Some(path) = &self.log_file {
            loggers.push(WriteLogger::new(
                self.log_level,
                simplelog::Config::default(),
                File::create(path)?,
            ));
        }

        CombinedLogger::init(loggers)?;

        Ok(())
    }
}
