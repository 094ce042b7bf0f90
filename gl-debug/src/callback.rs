//! The process-wide debug handler and the function handed to the driver.

use std::{
    ffi::c_void,
    panic::{AssertUnwindSafe, catch_unwind},
};

use gl::types::{GLDEBUGPROC, GLchar, GLenum, GLsizei, GLuint};

use crate::{
    message::{DebugMessage, UserData, decode_message},
    slot::{Handler, HandlerSlot},
};

static HANDLER: HandlerSlot = HandlerSlot::new();

/// [`debug_message_callback`] in the shape `glDebugMessageCallback` takes.
pub const DEBUG_PROC: GLDEBUGPROC = Some(debug_message_callback);

/// Replaces the process-wide handler, or clears it when `None`.
pub fn register(handler: Option<Handler>) {
    HANDLER.register(handler);
}

/// Registers a closure as the process-wide handler.
pub fn set_handler<F>(handler: F)
where
    F: Fn(&DebugMessage<'_>) + Send + Sync + 'static,
{
    HANDLER.set(handler);
}

#[inline]
pub fn unregister() {
    HANDLER.unregister();
}

#[inline]
pub fn is_registered() -> bool {
    HANDLER.is_registered()
}

/// The debug callback given to the driver.
///
/// Decodes `length` bytes of `message` and forwards everything to the
/// registered handler; does nothing when no handler is registered. May run on
/// any thread the driver processes commands on. A panicking handler is logged
/// and never unwinds into the driver.
pub extern "system" fn debug_message_callback(
    source: GLenum,
    gltype: GLenum,
    id: GLuint,
    severity: GLenum,
    length: GLsizei,
    message: *const GLchar,
    user_param: *mut c_void,
) {
    if !HANDLER.is_registered() {
        return;
    }

    // SAFETY: The driver guarantees `message` holds `length` bytes for the
    // duration of this call, and the text is dropped before returning.
    let text = unsafe { decode_message(message, length) };

    let message = DebugMessage {
        source,
        gltype,
        id,
        severity,
        length,
        message: &text,
        user_data: UserData::from_ptr(user_param),
    };

    if catch_unwind(AssertUnwindSafe(|| HANDLER.invoke(&message))).is_err() {
        log::error!("gl debug handler panicked while handling message #{id}");
    }
}
