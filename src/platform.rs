/// Platform - Dependency injection container for the host-facing ports.
///
/// Ports are stateless here, so they are held as `&'static` references.

use crate::ports::LoggerPort;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    /// Platform with a caller-provided logger.
    pub fn with_logger(logger: &'static dyn LoggerPort) -> Self {
        Self { logger }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
