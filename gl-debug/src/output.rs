use crate::{callback::DEBUG_PROC, message::UserData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutputError {
    /// The entry point was not loaded into the `gl` bindings, either because
    /// `gl::load_with` was never called or because the context does not
    /// support GL 4.3 / `KHR_debug`.
    #[error("{0} is not loaded")]
    NotLoaded(&'static str),
}

/// The description of how debug output is enabled on a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugOutputConfig {
    /// Whether to enable `GL_DEBUG_OUTPUT_SYNCHRONOUS`.
    ///
    /// When set, the driver delivers messages on the thread that issued the
    /// offending command, before the command returns.
    pub synchronous: bool,

    /// The pointer the driver hands back with every message.
    pub user_data: UserData,
}

impl Default for DebugOutputConfig {
    fn default() -> Self {
        Self {
            synchronous: true,
            user_data: UserData::null(),
        }
    }
}

fn ensure_loaded() -> Result<(), OutputError> {
    let entry_points = [
        ("glEnable", gl::Enable::is_loaded()),
        ("glDisable", gl::Disable::is_loaded()),
        ("glDebugMessageCallback", gl::DebugMessageCallback::is_loaded()),
    ];

    match entry_points.into_iter().find(|(_, loaded)| !loaded) {
        Some((name, _)) => Err(OutputError::NotLoaded(name)),
        None => Ok(()),
    }
}

/// Enables debug output on the current context and points it at
/// [`debug_message_callback`](crate::callback::debug_message_callback).
///
/// Only the driver side is touched: messages reach whatever handler is
/// registered at the time they are delivered.
///
/// # Safety
///
/// A GL context must be current on the calling thread and the `gl` function
/// pointers must have been loaded for it.
pub unsafe fn install(config: &DebugOutputConfig) -> Result<(), OutputError> {
    ensure_loaded()?;

    log::debug!(
        "Installing GL debug callback (synchronous: {}, user data: {:?})",
        config.synchronous,
        config.user_data
    );

    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);

        if config.synchronous {
            gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        } else {
            gl::Disable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        }

        gl::DebugMessageCallback(DEBUG_PROC, config.user_data.as_ptr().cast_const());
    }

    Ok(())
}

/// Detaches the callback from the driver and disables debug output.
///
/// The registered handler is left as is.
///
/// # Safety
///
/// Same requirements as [`install`].
pub unsafe fn uninstall() -> Result<(), OutputError> {
    ensure_loaded()?;

    log::debug!("Removing GL debug callback");

    unsafe {
        gl::DebugMessageCallback(None, std::ptr::null());
        gl::Disable(gl::DEBUG_OUTPUT);
    }

    Ok(())
}
