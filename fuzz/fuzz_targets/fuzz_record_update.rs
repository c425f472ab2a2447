// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use jsxn::{RecordFactory, ShapeRegistry};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fn records() -> &'static RecordFactory {
    static FACTORY: OnceLock<RecordFactory> = OnceLock::new();
    FACTORY.get_or_init(|| {
        ShapeRegistry::new()
            .factory("fuzz", Some(["id", "name", "tags", "meta"].into()))
            .expect("shape")
    })
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut record = records().template();
    record.set("id", 1).expect("declared");
    let before = record.to_map();

    // A failed update leaves the record untouched
    if record.update(text).is_err() {
        assert_eq!(record.to_map(), before);
    }

    // Whatever was accepted serializes back to the declared fields only
    let map = jsxn::codec::decode(&record.to_json()).expect("own output decodes");
    assert!(map.keys().all(|key| records().shape().contains(key)));
});
