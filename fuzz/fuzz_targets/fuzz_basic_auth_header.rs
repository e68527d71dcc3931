//! Fuzz target: decoding of `Authorization: Basic` header values.

#![no_main]

use coaster_gateway::admin::BasicCredentials;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        // Only panics matter here; rejection is the common outcome.
        let _ = BasicCredentials::from_header(value);
    }
});
