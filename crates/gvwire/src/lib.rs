// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # gvwire - GVariant wire-format layout codec
//!
//! Sizing, alignment and offset-table primitives for the GVariant-compatible
//! binary format spoken by message-bus IPC peers.
//!
//! Given a textual type signature, gvwire answers the questions a value
//! marshaller must settle before it can place a single byte:
//!
//! - is the type fixed-size at all? ([`is_fixed_size`])
//! - if so, exactly how many bytes does it marshal to? ([`fixed_size_of`])
//! - which boundary must the write cursor be rounded up to? ([`alignment_of`])
//! - how wide are the offset words of a variable-size container, and how are
//!   they read and written? ([`choose_word_width`], [`read_word_le`],
//!   [`write_word_le`])
//!
//! ## Quick Start
//!
//! ```rust
//! use gvwire::{alignment_of, fixed_size_of, is_fixed_size, Result};
//!
//! fn main() -> Result<()> {
//!     // A byte followed by a 64-bit integer: 1 + 7 padding + 8 = 16 bytes.
//!     assert_eq!(fixed_size_of("(yx)")?, 16);
//!     assert_eq!(alignment_of("(yx)")?, 8);
//!
//!     // Strings, arrays and variants are never fixed-size.
//!     assert!(!is_fixed_size("as")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +--------------------------------------------------------------+
//! |                  Value Marshaller (external)                 |
//! |   walks a value tree, places payload bytes and offset table  |
//! +--------------------------------------------------------------+
//! |                        Layout Layer                          |
//! |   alignment_of | is_fixed_size | fixed_size_of | align_up    |
//! +--------------------------------------------------------------+
//! |                      Signature Layer                         |
//! |   type-code table | element lexer | validity helpers         |
//! +--------------------------------------------------------------+
//! |                     Offset-Word Layer                        |
//! |   choose_word_width | read_word_le | write_word_le           |
//! +--------------------------------------------------------------+
//! ```
//!
//! ## Modules Overview
//!
//! - [`signature`] - type-code table and signature element lexer
//! - [`layout`] - alignment, fixed-size classification, exact sizing
//! - [`offsets`] - offset-table word width selection and LE word I/O
//!
//! Every operation is a pure synchronous function over caller-owned data;
//! there is no shared state and every function is freely callable from any
//! thread or task context.

/// Error type and crate-wide `Result` alias.
pub mod error;
/// Layout rules: alignment, fixed-size classification and exact sizing.
pub mod layout;
/// Offset-table words: width selection and little-endian I/O.
pub mod offsets;
/// Signature grammar: type codes, element lexer, validity helpers.
pub mod signature;

pub use error::{Error, Result};
pub use layout::{align_up, alignment_of, fixed_size_of, is_fixed_size};
pub use offsets::{choose_word_width, read_word_le, write_word_le};
pub use signature::{is_single, is_valid, next_element, Element};
