// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire type codes for the message-bus signature grammar.
//!
//! Centralizes the code table plus the per-code width/alignment
//! classification so the lexer and the layout calculators agree on one
//! source of truth.

/// 8-bit unsigned integer.
pub const BYTE: u8 = b'y';
/// Boolean, marshalled as one byte holding 0 or 1.
pub const BOOLEAN: u8 = b'b';
/// Signed 16-bit integer.
pub const INT16: u8 = b'n';
/// Unsigned 16-bit integer.
pub const UINT16: u8 = b'q';
/// Signed 32-bit integer.
pub const INT32: u8 = b'i';
/// Unsigned 32-bit integer.
pub const UINT32: u8 = b'u';
/// Signed 64-bit integer.
pub const INT64: u8 = b'x';
/// Unsigned 64-bit integer.
pub const UINT64: u8 = b't';
/// IEEE 754 double-precision float.
pub const DOUBLE: u8 = b'd';
/// UTF-8 string, NUL-terminated on the wire.
pub const STRING: u8 = b's';
/// Object path string.
pub const OBJECT_PATH: u8 = b'o';
/// Type signature string.
pub const SIGNATURE: u8 = b'g';
/// Index into the out-of-band Unix file descriptor array.
pub const UNIX_FD: u8 = b'h';
/// Array of one element type.
pub const ARRAY: u8 = b'a';
/// Variant: a value carrying its own type signature.
pub const VARIANT: u8 = b'v';
/// Structure open delimiter.
pub const STRUCT_BEGIN: u8 = b'(';
/// Structure close delimiter.
pub const STRUCT_END: u8 = b')';
/// Dictionary entry open delimiter.
pub const DICT_ENTRY_BEGIN: u8 = b'{';
/// Dictionary entry close delimiter.
pub const DICT_ENTRY_END: u8 = b'}';

/// Longest signature the bus protocol accepts, in bytes.
pub const MAX_SIGNATURE_LEN: usize = 255;

/// Deepest array or structure nesting the lexer accepts.
pub const MAX_NESTING_DEPTH: usize = 32;

/// True for the basic (single-character, non-container) type codes.
///
/// Basic codes are the only ones legal as a dictionary entry key.
pub const fn is_basic(code: u8) -> bool {
    matches!(
        code,
        BYTE | BOOLEAN
            | INT16
            | UINT16
            | INT32
            | UINT32
            | INT64
            | UINT64
            | DOUBLE
            | STRING
            | OBJECT_PATH
            | SIGNATURE
            | UNIX_FD
    )
}

/// Marshalled byte width of a fixed-size scalar code, `None` for
/// everything else (string-like codes, variant, containers, junk).
pub const fn fixed_width(code: u8) -> Option<usize> {
    match code {
        BYTE | BOOLEAN => Some(1),
        INT16 | UINT16 => Some(2),
        INT32 | UINT32 | UNIX_FD => Some(4),
        INT64 | UINT64 | DOUBLE => Some(8),
        _ => None,
    }
}

/// Alignment boundary of a single-character code, `None` for containers
/// and unrecognized bytes. Arrays take their element's alignment and
/// structures the maximum of their members; both are the lexer's job.
pub const fn alignment(code: u8) -> Option<usize> {
    match code {
        BYTE | BOOLEAN | STRING | OBJECT_PATH | SIGNATURE => Some(1),
        INT16 | UINT16 => Some(2),
        INT32 | UINT32 | UNIX_FD => Some(4),
        INT64 | UINT64 | DOUBLE | VARIANT => Some(8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_table() {
        assert_eq!(fixed_width(BYTE), Some(1));
        assert_eq!(fixed_width(BOOLEAN), Some(1));
        assert_eq!(fixed_width(INT16), Some(2));
        assert_eq!(fixed_width(UINT16), Some(2));
        assert_eq!(fixed_width(INT32), Some(4));
        assert_eq!(fixed_width(UINT32), Some(4));
        assert_eq!(fixed_width(UNIX_FD), Some(4));
        assert_eq!(fixed_width(INT64), Some(8));
        assert_eq!(fixed_width(UINT64), Some(8));
        assert_eq!(fixed_width(DOUBLE), Some(8));

        for code in [STRING, OBJECT_PATH, SIGNATURE, VARIANT, ARRAY, STRUCT_BEGIN, b'?'] {
            assert_eq!(fixed_width(code), None);
        }
    }

    #[test]
    fn test_alignment_table() {
        assert_eq!(alignment(BYTE), Some(1));
        assert_eq!(alignment(STRING), Some(1));
        assert_eq!(alignment(INT16), Some(2));
        assert_eq!(alignment(UNIX_FD), Some(4));
        assert_eq!(alignment(DOUBLE), Some(8));
        assert_eq!(alignment(VARIANT), Some(8));

        for code in [ARRAY, STRUCT_BEGIN, STRUCT_END, DICT_ENTRY_BEGIN, b'z'] {
            assert_eq!(alignment(code), None);
        }
    }

    #[test]
    fn test_is_basic_excludes_containers_and_variant() {
        assert!(is_basic(BYTE));
        assert!(is_basic(STRING));
        assert!(is_basic(UNIX_FD));

        assert!(!is_basic(VARIANT));
        assert!(!is_basic(ARRAY));
        assert!(!is_basic(STRUCT_BEGIN));
        assert!(!is_basic(DICT_ENTRY_BEGIN));
    }
}
