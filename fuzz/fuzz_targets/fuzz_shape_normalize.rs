// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use jsxn::{normalize, ShapeInput};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // JSON form: either a shape or an error, never a panic
    if let Ok(shape) = normalize(Some("fuzz"), ShapeInput::from(text)) {
        assert!(!shape.is_empty());
        for (index, name) in shape.field_names().enumerate() {
            assert_eq!(shape.field_index(name), Some(index));
        }
    }

    // Field-list form from whitespace-separated tokens
    let names: Vec<&str> = text.split_whitespace().collect();
    if let Ok(shape) = normalize(None, ShapeInput::from(names.clone())) {
        assert_eq!(shape.len(), names.len());
    }
});
