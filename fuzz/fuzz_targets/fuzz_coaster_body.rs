//! Fuzz target: JSON deserialization of a `Coaster` create body.
//!
//! Arbitrary bytes must never panic the parser, and anything that does parse
//! must serialize back out.

#![no_main]

use coaster_core::Coaster;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(coaster) = serde_json::from_slice::<Coaster>(data) {
        assert!(serde_json::to_vec(&coaster).is_ok());
    }
});
