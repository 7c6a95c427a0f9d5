// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Layout rules for marshalled values: alignment, fixed-size
//! classification and exact sizing.
//!
//! A container pads its write cursor to each member's alignment before
//! appending it, and a fixed-size value is additionally padded to its own
//! alignment when embedded in an outer container. [`fixed_size_of`]
//! reproduces both rules, so the size it returns is the exact byte count
//! the marshaller will emit for any value of that type.

use crate::error::{Error, Result};
use crate::signature::codes;
use crate::signature::next_element;

/// Round `offset` up to the next multiple of `alignment`.
///
/// `alignment` must be a power of two (the format only knows 1, 2, 4, 8).
pub fn align_up(offset: usize, alignment: usize) -> usize {
    if alignment <= 1 {
        return offset;
    }
    let mask = alignment - 1;
    (offset + mask) & !mask
}

/// Alignment requirement of a whole signature: the maximum alignment of
/// its top-level elements, always one of 1, 2, 4 or 8.
///
/// 8 is the widest boundary the format knows, so the walk stops as soon
/// as the running maximum reaches it; elements after that point are not
/// lexed at all.
pub fn alignment_of(signature: &str) -> Result<usize> {
    let mut alignment = 1;
    let mut offset = 0;

    while offset < signature.len() && alignment < 8 {
        let element = next_element(signature, offset)?;
        alignment = alignment.max(element.alignment);
        offset += element.len;
    }

    Ok(alignment)
}

/// Whether every element of `signature` marshals to a size determined by
/// the type alone.
///
/// Returns `Ok(false)` on the first variable-size element without
/// scanning the rest of the signature.
pub fn is_fixed_size(signature: &str) -> Result<bool> {
    let mut offset = 0;

    while offset < signature.len() {
        let element = next_element(signature, offset)?;
        if !element.fixed {
            return Ok(false);
        }
        offset += element.len;
    }

    Ok(true)
}

/// Exact marshalled byte size of a fixed-size signature, including
/// internal padding and the trailing pad to the signature's own
/// alignment.
///
/// Fails with [`Error::NotFixedSize`] as soon as any element (nested ones
/// included) is variable-size; the caller then switches to offset-table
/// layout instead.
pub fn fixed_size_of(signature: &str) -> Result<usize> {
    let sig = signature.as_bytes();
    let mut sum = 0;
    let mut offset = 0;

    while offset < sig.len() {
        let element = next_element(signature, offset)?;
        sum = align_up(sum, element.alignment);

        sum += match sig[offset] {
            codes::BOOLEAN | codes::BYTE => 1,

            codes::INT16 | codes::UINT16 => 2,

            codes::INT32 | codes::UINT32 | codes::UNIX_FD => 4,

            codes::INT64 | codes::UINT64 | codes::DOUBLE => 8,

            codes::STRUCT_BEGIN | codes::DICT_ENTRY_BEGIN => {
                if element.len == 2 {
                    // the unit pair `()` marshals to a single byte
                    1
                } else {
                    fixed_size_of(&signature[offset + 1..offset + element.len - 1])?
                }
            }

            codes::STRING
            | codes::OBJECT_PATH
            | codes::SIGNATURE
            | codes::ARRAY
            | codes::VARIANT => return Err(Error::NotFixedSize),

            _ => {
                return Err(Error::InvalidSignature {
                    offset,
                    reason: "unknown type code",
                })
            }
        };

        offset += element.len;
    }

    let alignment = alignment_of(signature)?;
    Ok(align_up(sum, alignment))
}
