use gl::types::GLenum;

use crate::gl_enum;

/// A numeric value that does not name any known variant of a debug enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: 0x{value:04X}")]
pub struct UnknownEnumError {
    /// The name of the enumeration the value was converted into.
    pub kind: &'static str,

    /// The raw value reported by the driver.
    pub value: GLenum,
}

gl_enum! {
    /// The component that generated a debug message.
    pub enum DebugSource {
        /// Calls to the GL API.
        Api => (gl::DEBUG_SOURCE_API, "API"),

        /// Calls to the window-system API.
        WindowSystem => (gl::DEBUG_SOURCE_WINDOW_SYSTEM, "Window System"),

        /// The GLSL compiler.
        ShaderCompiler => (gl::DEBUG_SOURCE_SHADER_COMPILER, "Shader Compiler"),

        /// Tools and libraries associated with GL, e.g. a debugger.
        ThirdParty => (gl::DEBUG_SOURCE_THIRD_PARTY, "Third Party"),

        /// The application itself, through `glDebugMessageInsert`.
        Application => (gl::DEBUG_SOURCE_APPLICATION, "Application"),

        Other => (gl::DEBUG_SOURCE_OTHER, "Other"),
    }
}

gl_enum! {
    /// The kind of event a debug message describes.
    pub enum DebugType {
        Error => (gl::DEBUG_TYPE_ERROR, "Error"),
        DeprecatedBehavior => (gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR, "Deprecated Behavior"),
        UndefinedBehavior => (gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR, "Undefined Behavior"),
        Portability => (gl::DEBUG_TYPE_PORTABILITY, "Portability"),
        Performance => (gl::DEBUG_TYPE_PERFORMANCE, "Performance"),

        /// Command stream annotation.
        Marker => (gl::DEBUG_TYPE_MARKER, "Marker"),

        /// Entering a debug group (`glPushDebugGroup`).
        PushGroup => (gl::DEBUG_TYPE_PUSH_GROUP, "Push Group"),

        /// Leaving a debug group (`glPopDebugGroup`).
        PopGroup => (gl::DEBUG_TYPE_POP_GROUP, "Pop Group"),

        Other => (gl::DEBUG_TYPE_OTHER, "Other"),
    }
}

gl_enum! {
    /// How important the driver considers a debug message.
    pub enum DebugSeverity {
        /// Errors or dangerous undefined behavior.
        High => (gl::DEBUG_SEVERITY_HIGH, "high"),

        /// Major performance warnings, shader compilation warnings or use of
        /// deprecated functionality.
        Medium => (gl::DEBUG_SEVERITY_MEDIUM, "medium"),

        /// Redundant state changes, trivial undefined behavior.
        Low => (gl::DEBUG_SEVERITY_LOW, "low"),

        /// Anything that isn't an error or performance issue.
        Notification => (gl::DEBUG_SEVERITY_NOTIFICATION, "notification"),
    }
}

impl DebugSeverity {
    /// Returns the [`log::Level`] messages of this severity are logged at.
    #[inline]
    pub const fn log_level(self) -> log::Level {
        match self {
            DebugSeverity::High => log::Level::Error,
            DebugSeverity::Medium => log::Level::Warn,
            DebugSeverity::Low => log::Level::Info,
            DebugSeverity::Notification => log::Level::Debug,
        }
    }
}
