/// Declares a typed view over a family of `GLenum` constants.
///
/// Generates the enum itself, `as_raw`, `TryFrom<GLenum>` (failing with
/// [`UnknownEnumError`](crate::types::UnknownEnumError)) and a `Display`
/// implementation printing the given label.
#[macro_export]
macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ident:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($raw:expr, $label:literal)
            ),*
            $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$meta])*
        $vis enum $ident {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $ident {
            #[doc = concat!("All the variants of [`", stringify!($ident), "`].")]
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the numeric value the driver uses for this variant.
            #[inline]
            pub const fn as_raw(self) -> ::gl::types::GLenum {
                match self {
                    $(
                        Self::$variant => $raw,
                    )*
                }
            }
        }

        impl TryFrom<::gl::types::GLenum> for $ident {
            type Error = $crate::types::UnknownEnumError;

            fn try_from(
                value: ::gl::types::GLenum,
            ) -> Result<Self, $crate::types::UnknownEnumError> {
                $(
                    if value == $raw {
                        return Ok(Self::$variant);
                    }
                )*

                Err($crate::types::UnknownEnumError {
                    kind: stringify!($ident),
                    value,
                })
            }
        }

        impl From<$ident> for ::gl::types::GLenum {
            #[inline]
            fn from(value: $ident) -> Self {
                value.as_raw()
            }
        }

        impl std::fmt::Display for $ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let label = match self {
                    $(
                        Self::$variant => $label,
                    )*
                };

                f.write_str(label)
            }
        }
    };
}
