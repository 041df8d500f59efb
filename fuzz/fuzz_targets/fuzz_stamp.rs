#![no_main]

use libfuzzer_sys::fuzz_target;
use spdx_stamp::{stamp, Header};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let header = Header::default();
        match stamp(content, &header) {
            Some(out) => {
                assert!(out.ends_with(content));
                assert_eq!(stamp(&out, &header), None);
            }
            None => assert!(header.is_present_in(content)),
        }
    }
});
