#![no_main]
use brackdom::{parse_with_config, Config, Input};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(nodes) = parse_with_config(s, Config::unlimited()) {
            let len = Input::new(s).char_len();
            let mut previous = 0;
            for node in &nodes {
                assert!(node.end_offset() > previous && node.end_offset() <= len);
                previous = node.end_offset();
            }
        }
    }
});
