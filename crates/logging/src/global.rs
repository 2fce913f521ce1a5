//! crates/logging/src/global.rs
//! The lazily created process-wide logger and free functions over it.

use crate::calls::SeverityLogger;
use crate::config::Config;
use crate::error::ConfigResult;
use crate::levels::Severity;
use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created on first use with the defaults of
/// [`Logger::new`].
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// [`Logger::set_threshold`] on the global logger.
pub fn set_threshold(level: Severity) {
    global().set_threshold(level);
}

/// [`Logger::threshold`] of the global logger.
pub fn threshold() -> Severity {
    global().threshold()
}

/// [`Logger::apply_config`] on the global logger.
pub fn apply_config(config: &Config) -> ConfigResult<()> {
    global().apply_config(config)
}

/// [`Logger::load_config`] on the global logger.
pub fn load_config(bytes: &[u8]) -> ConfigResult<Config> {
    global().load_config(bytes)
}

/// Debug call families on the global logger.
pub fn debug() -> SeverityLogger<'static> {
    global().debug()
}

/// Info call families on the global logger.
pub fn info() -> SeverityLogger<'static> {
    global().info()
}

/// Warn call families on the global logger.
pub fn warn() -> SeverityLogger<'static> {
    global().warn()
}

/// Error call families on the global logger.
pub fn error() -> SeverityLogger<'static> {
    global().error()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_is_a_single_instance() {
        assert!(std::ptr::eq(global(), global()));
    }

    #[test]
    fn handles_bind_the_requested_severity() {
        assert_eq!(debug().severity(), Severity::Debug);
        assert_eq!(info().severity(), Severity::Info);
        assert_eq!(warn().severity(), Severity::Warn);
        assert_eq!(error().severity(), Severity::Error);
    }
}
