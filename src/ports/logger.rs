/// Logger port - provides logging capabilities across platforms.
///
/// Abstracts logging from platform-specific implementations:
/// - WASM: Console API (console.debug, console.log, console.warn, console.error)
/// - Native: standard output and standard error
pub trait LoggerPort: Send + Sync {
    /// Log registry traffic: queue sizes, subscriptions.
    fn debug(&self, message: &str);

    /// Log an informational message.
    fn log(&self, message: &str);

    /// Log an error message.
    fn error(&self, message: &str);

    /// Log a warning message.
    fn warn(&self, message: &str);
}
