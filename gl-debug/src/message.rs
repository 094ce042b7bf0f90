use std::{
    borrow::Cow,
    ffi::{CStr, c_void},
    fmt::Display,
};

use gl::types::{GLchar, GLenum, GLsizei, GLuint};

use crate::types::{DebugSeverity, DebugSource, DebugType, UnknownEnumError};

/// The opaque user pointer handed to the driver alongside the callback.
///
/// It is passed through untouched and never dereferenced by this crate.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserData(*mut c_void);

impl Default for UserData {
    fn default() -> Self {
        Self::null()
    }
}

impl UserData {
    #[inline]
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    #[inline]
    pub const fn from_ptr(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    #[inline]
    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

/// A single diagnostic event delivered by the driver.
///
/// The numeric fields are exactly what the driver reported. The text borrows
/// the driver's buffer (or a decoded copy of it) and only lives for the
/// duration of one callback invocation.
#[derive(Debug, Clone, Copy)]
pub struct DebugMessage<'a> {
    /// The `GL_DEBUG_SOURCE_*` value.
    pub source: GLenum,

    /// The `GL_DEBUG_TYPE_*` value.
    pub gltype: GLenum,

    /// The implementation defined message id.
    pub id: GLuint,

    /// The `GL_DEBUG_SEVERITY_*` value.
    pub severity: GLenum,

    /// The byte length the driver reported for the message.
    pub length: GLsizei,

    /// The decoded message text.
    pub message: &'a str,

    pub user_data: UserData,
}

impl DebugMessage<'_> {
    #[inline]
    pub fn debug_source(&self) -> Result<DebugSource, UnknownEnumError> {
        DebugSource::try_from(self.source)
    }

    #[inline]
    pub fn debug_type(&self) -> Result<DebugType, UnknownEnumError> {
        DebugType::try_from(self.gltype)
    }

    #[inline]
    pub fn debug_severity(&self) -> Result<DebugSeverity, UnknownEnumError> {
        DebugSeverity::try_from(self.severity)
    }
}

impl Display for DebugMessage<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        write_label(f, self.debug_source(), self.source)?;
        f.write_str("/")?;
        write_label(f, self.debug_type(), self.gltype)?;
        f.write_str("/")?;
        write_label(f, self.debug_severity(), self.severity)?;
        write!(f, " #{}] {}", self.id, self.message)
    }
}

fn write_label<T: Display>(
    f: &mut std::fmt::Formatter<'_>,
    label: Result<T, UnknownEnumError>,
    raw: GLenum,
) -> std::fmt::Result {
    match label {
        Ok(label) => write!(f, "{label}"),
        Err(_) => write!(f, "0x{raw:04X}"),
    }
}

/// Reads the text of a debug message out of the driver's buffer.
///
/// Exactly `length` bytes are read; the buffer does not need to be
/// NUL-terminated. A negative `length` means the driver did not report one,
/// in which case the buffer is read up to its NUL terminator. A null `message`
/// or a zero `length` yields an empty string without touching the buffer.
///
/// Valid UTF-8 is borrowed straight from the buffer. Invalid sequences are
/// replaced with `U+FFFD`, which costs one allocation.
///
/// # Safety
///
/// If `message` is non-null it must point to at least `length` readable bytes
/// (or to a NUL-terminated string when `length` is negative) that stay valid
/// for `'a`.
pub unsafe fn decode_message<'a>(message: *const GLchar, length: GLsizei) -> Cow<'a, str> {
    if message.is_null() || length == 0 {
        return Cow::Borrowed("");
    }

    let bytes: &'a [u8] = if length < 0 {
        unsafe { CStr::from_ptr(message) }.to_bytes()
    } else {
        unsafe { std::slice::from_raw_parts(message.cast::<u8>(), length as usize) }
    };

    String::from_utf8_lossy(bytes)
}
