#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        // Extension parsing and matching should never panic
        if let Ok(ext) = spdx_stamp::Extension::new(value) {
            let _ = ext.matches(std::path::Path::new(value));
        }
    }
});
