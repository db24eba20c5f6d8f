#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some((&offset, rest)) = data.split_first() {
        if let Ok(s) = std::str::from_utf8(rest) {
            let _ = brackdom::parse_node(s, usize::from(offset));
        }
    }
});
