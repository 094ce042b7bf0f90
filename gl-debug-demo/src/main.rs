//! Plays the part of a GL driver: delivers debug messages to the adapter from
//! several threads, the way a driver with asynchronous debug output does.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::{Result, anyhow};
use gl::types::{GLenum, GLsizei};

/// A message as the driver would report it.
struct DriverMessage {
    source: GLenum,
    gltype: GLenum,
    id: u32,
    severity: GLenum,
    text: &'static [u8],
}

const MESSAGES: &[DriverMessage] = &[
    DriverMessage {
        source: gl::DEBUG_SOURCE_API,
        gltype: gl::DEBUG_TYPE_ERROR,
        id: 1282,
        severity: gl::DEBUG_SEVERITY_HIGH,
        text: b"GL_INVALID_OPERATION in glDrawElements(no VAO bound)",
    },
    DriverMessage {
        source: gl::DEBUG_SOURCE_SHADER_COMPILER,
        gltype: gl::DEBUG_TYPE_PORTABILITY,
        id: 7,
        severity: gl::DEBUG_SEVERITY_MEDIUM,
        text: b"0:12(3): warning: implicit conversion from int to float",
    },
    DriverMessage {
        source: gl::DEBUG_SOURCE_API,
        gltype: gl::DEBUG_TYPE_PERFORMANCE,
        id: 131218,
        severity: gl::DEBUG_SEVERITY_LOW,
        text: b"Program/shader state performance warning: recompiling",
    },
    DriverMessage {
        source: gl::DEBUG_SOURCE_API,
        gltype: gl::DEBUG_TYPE_OTHER,
        id: 131185,
        severity: gl::DEBUG_SEVERITY_NOTIFICATION,
        text: b"Buffer object 3 will use VIDEO memory as the source",
    },
];

impl DriverMessage {
    /// Calls the trampoline with a buffer that is not NUL-terminated.
    fn deliver(&self) {
        let mut buffer = self.text.to_vec();
        buffer.extend_from_slice(b"<driver scratch>");

        gl_debug::debug_message_callback(
            self.source,
            self.gltype,
            self.id,
            self.severity,
            self.text.len() as GLsizei,
            buffer.as_ptr().cast(),
            std::ptr::null_mut(),
        );
    }
}

/// Delivers every message from `threads` driver threads at once.
fn deliver_concurrently(threads: usize) -> Result<()> {
    crossbeam::scope(|scope| {
        for thread in 0..threads {
            scope.spawn(move |_| {
                log::debug!("Driver thread {thread} delivering {} messages", MESSAGES.len());
                for message in MESSAGES {
                    message.deliver();
                }
            });
        }
    })
    .map_err(|_| anyhow!("a driver thread panicked"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    log::info!("Delivering messages with the stock logger registered...");
    gl_debug::logger::register_logger();
    deliver_concurrently(2)?;

    log::info!("Replacing the logger with a counting handler...");
    let delivered = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&delivered);
    gl_debug::set_handler(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    deliver_concurrently(4)?;
    log::info!(
        "Counting handler saw {} messages",
        delivered.load(Ordering::SeqCst)
    );

    log::info!("Delivering a zero-length message...");
    gl_debug::set_handler(|message| {
        log::info!("Zero-length message #{} has text {:?}", message.id, message.message);
    });
    gl_debug::debug_message_callback(
        gl::DEBUG_SOURCE_APPLICATION,
        gl::DEBUG_TYPE_MARKER,
        0,
        gl::DEBUG_SEVERITY_NOTIFICATION,
        0,
        std::ptr::null(),
        std::ptr::null_mut(),
    );

    log::info!("Registering a handler that unregisters itself...");
    gl_debug::set_handler(|message| {
        gl_debug::unregister();
        log::info!("Last message before unregistering: {message}");
    });
    deliver_concurrently(1)?;

    if gl_debug::is_registered() {
        return Err(anyhow!("handler is still registered after unregistering itself"));
    }

    log::info!("No handler registered, further messages are dropped");
    MESSAGES[0].deliver();

    Ok(())
}
