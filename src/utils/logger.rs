use std::fmt::Arguments;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use chrono::Local;

use crate::utils::errors::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl FromStr for Level {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(SettingsError::LogLevel(value.to_string())),
        }
    }
}

static THRESHOLD: AtomicU8 = AtomicU8::new(Level::Warn as u8);

/// Log lines go to stderr; stdout belongs to command output.
pub struct Logger;

impl Logger {
    pub fn set_level(level: Level) {
        THRESHOLD.store(level as u8, Ordering::Relaxed);
    }

    pub fn enabled(level: Level) -> bool {
        level as u8 >= THRESHOLD.load(Ordering::Relaxed)
    }

    pub fn info(args: Arguments) {
        Logger::write(Level::Info, "[INFO ]", args);
    }

    pub fn debug(args: Arguments) {
        Logger::write(Level::Debug, "[DEBUG]", args);
    }

    pub fn warn(args: Arguments) {
        Logger::write(Level::Warn, "[WARN ]", args);
    }

    pub fn error(args: Arguments) {
        Logger::write(Level::Error, "[ERROR]", args);
    }

    fn write(level: Level, tag: &str, args: Arguments) {
        if !Logger::enabled(level) {
            return;
        }
        let local = Local::now().format("%d/%m/%Y %H:%M:%S");
        eprintln!("{tag} [{local}] {args}");
    }
}

#[macro_export]
macro_rules! logger {
    (INFO, $($arg:tt)*) => {
        $crate::utils::logger::Logger::info(format_args!($($arg)*))
    };
    (DEBUG, $($arg:tt)*) => {
        $crate::utils::logger::Logger::debug(format_args!($($arg)*))
    };
    (WARN, $($arg:tt)*) => {
        $crate::utils::logger::Logger::warn(format_args!($($arg)*))
    };
    (ERROR, $($arg:tt)*) => {
        $crate::utils::logger::Logger::error(format_args!($($arg)*))
    };
}
