//! Centralized constants for env file loading.
//!
//! Defaults used by the parser and loader live here rather than being
//! repeated as literals across modules.

// =============================================================================
// File Defaults
// =============================================================================

/// File name used when `load` is called with an empty filename.
///
/// Resolved relative to the current working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

// =============================================================================
// Line Syntax
// =============================================================================

/// A trimmed line starting with this character is a full-line comment.
pub const COMMENT_PREFIX: char = '#';

/// Separates the key from the value. Only the first occurrence splits.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// A value starting with one of these has its first and last characters removed.
pub const QUOTE_CHARS: [char; 2] = ['"', '\''];

// =============================================================================
// Boolean Coercion
// =============================================================================

/// Lower-cased values `get_bool` treats as `true`.
pub const TRUE_VALUES: [&str; 3] = ["1", "t", "true"];

/// Lower-cased values `get_bool` treats as `false`.
pub const FALSE_VALUES: [&str; 3] = ["0", "f", "false"];
