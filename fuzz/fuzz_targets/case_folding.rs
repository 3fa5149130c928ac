#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    editdist_fuzz::fuzz_case_folding(data);
});
