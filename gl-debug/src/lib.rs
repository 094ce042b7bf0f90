//! Forwards the OpenGL debug output callback (`glDebugMessageCallback`) to a
//! Rust handler.
//!
//! The driver is given [`debug_message_callback`], a plain `extern "system"`
//! function. Every message it receives is decoded into a [`DebugMessage`] and
//! passed to the single handler registered with [`register`] or
//! [`set_handler`]. Without a handler, messages are dropped.
//!
//! ```no_run
//! gl_debug::logger::register_logger();
//!
//! // With a current context and loaded `gl` function pointers:
//! unsafe { gl_debug::output::install(&Default::default()) }.unwrap();
//! ```

pub mod callback;
pub mod logger;
pub mod message;
pub mod output;
pub mod slot;
pub mod types;

mod macros;

pub use callback::{
    DEBUG_PROC, debug_message_callback, is_registered, register, set_handler, unregister,
};
pub use message::{DebugMessage, UserData};
pub use slot::{Handler, HandlerSlot};
pub use types::{DebugSeverity, DebugSource, DebugType, UnknownEnumError};
