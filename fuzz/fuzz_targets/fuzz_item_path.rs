//! Fuzz target: item path parsing.
//!
//! Any path that parses to an id must be the collection prefix plus exactly
//! one slash-free segment.

#![no_main]

use coaster_gateway::routes::{ItemRoute, COLLECTION};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(path) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(ItemRoute::Id(segment)) = ItemRoute::parse(path) {
        assert!(!segment.contains('/'));
        assert_eq!(path, format!("/{COLLECTION}/{segment}"));
    }
});
