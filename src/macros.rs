//! Utility macros for the semantic core.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_HIGHLIGHT!` - Quotes a name for a diagnostic message, optionally
//!   wrapped in ANSI bold markers
//! - `MK_ERROR!` - Creates an Error instance
//!
//! These macros reduce boilerplate when building diagnostics.

/// Bold-white ANSI marker placed before highlighted names.
pub const HIGHLIGHT_START: &str = "\x1b[1;97m";
/// ANSI reset marker placed after highlighted names.
pub const HIGHLIGHT_END: &str = "\x1b[0m";

/// Quotes a value for a diagnostic message.
///
/// # Arguments
///
/// * `$highlight` - Whether to wrap the quoted value in ANSI markers
/// * `$value` - Anything implementing `Display`
///
/// # Example
///
/// ```ignore
/// let name = MK_HIGHLIGHT!(true, "x"); // "\x1b[1;97m‘x’\x1b[0m"
/// ```
#[macro_export]
macro_rules! MK_HIGHLIGHT {
    ($highlight:expr, $value:expr) => {
        if $highlight {
            format!(
                "{}‘{}’{}",
                $crate::macros::HIGHLIGHT_START,
                $value,
                $crate::macros::HIGHLIGHT_END
            )
        } else {
            format!("‘{}’", $value)
        }
    };
}

/// Creates an Error instance.
///
/// # Arguments
///
/// * `$kind` - The ErrorImpl variant
/// * `$position` - The source position (cloned)
///
/// # Example
///
/// ```ignore
/// let error = MK_ERROR!(ErrorImpl::ReservedIdentifier { identifier }, position);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $position:expr) => {
        $crate::errors::errors::Error::new($kind, $position.clone())
    };
}
