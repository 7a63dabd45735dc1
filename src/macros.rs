//! Utility macros.
//!
//! This module defines the helper macro used to build tokens:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Scanners feeding this parser (and the test suites) use it to cut
//! down on construction boilerplate.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string image
/// * `$position` - The source position of the token
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}
