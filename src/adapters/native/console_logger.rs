use crate::ports::LoggerPort;

/// Native logger implementation using stdout/stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn debug(&self, message: &str) {
        if cfg!(debug_assertions) {
            println!("[wallets:DEBUG] {message}");
        }
    }

    fn log(&self, message: &str) {
        println!("[wallets] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[wallets:ERROR] {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[wallets:WARN] {message}");
    }
}
