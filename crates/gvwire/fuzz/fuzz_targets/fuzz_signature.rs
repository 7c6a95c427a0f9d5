// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for signature walking
//!
//! Feeds arbitrary strings to the lexer and the layout calculators.
//! Malformed input must surface as an error value; none of these calls
//! may panic, loop or recurse unboundedly.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(signature) = std::str::from_utf8(data) {
        let _ = gvwire::is_valid(signature);
        let _ = gvwire::is_single(signature);
        let _ = gvwire::next_element(signature, 0);
        let _ = gvwire::alignment_of(signature);
        let _ = gvwire::is_fixed_size(signature);
        let _ = gvwire::fixed_size_of(signature);
    }
});
