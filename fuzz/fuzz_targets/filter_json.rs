//! Fuzz target for JSON filter payloads.
//!
//! Feeds arbitrary bytes through JSON parsing, compilation and MongoDB
//! rendering to find panics anywhere on that path.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_filter_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use stash_filter::{FilterCompiler, FilterInput, ItemQueryForm};
use stash_mongodb::to_query;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let compiler = FilterCompiler::default();

    if let Ok(input) = FilterInput::from_json(text) {
        if let Ok(predicates) = compiler.compile(&input) {
            let _ = to_query(&predicates);
        }
    }

    if let Ok(form) = ItemQueryForm::from_json(text) {
        let _ = compiler.compile(&FilterInput::from(form));
    }
});
