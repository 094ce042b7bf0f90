//! A stock handler that forwards debug messages to the `log` facade.

use crate::{callback, message::DebugMessage, types::DebugSeverity};

/// The `log` target every debug message is written to.
pub const LOG_TARGET: &str = "gl_debug";

/// Returns the level `message` is logged at.
///
/// Severities the driver made up are logged as warnings.
pub fn log_level(message: &DebugMessage<'_>) -> log::Level {
    message
        .debug_severity()
        .map(DebugSeverity::log_level)
        .unwrap_or(log::Level::Warn)
}

/// Writes `message` to the logger.
pub fn log_message(message: &DebugMessage<'_>) {
    log::log!(target: LOG_TARGET, log_level(message), "{message}");
}

/// Registers [`log_message`] as the process-wide handler.
pub fn register_logger() {
    callback::set_handler(log_message);
}
