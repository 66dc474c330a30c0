#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding and tokenizing arbitrary bytes must never panic
    let text = lsearch::utils::decode_lossy(data);
    for line in lsearch::utils::split_lines(&text) {
        for term in lsearch::utils::tokenize(&line) {
            assert!(!term.is_empty());
        }
    }
});
