#![no_main]

use lang_demangle::rust_legacy;
use test_utilities::mangle_legacy;

fn fuzz_with(segments: &[&str], hash: u64) {
    if segments.iter().all(|segment| !segment.is_empty() && segment.bytes().all(|c| c.is_ascii_graphic())) {
        let _ = rust_legacy::demangle(&mangle_legacy(segments.iter().copied(), hash));
    }

    for segment in segments {
        let _ = rust_legacy::escape::decode(segment);
    }
}

libfuzzer_sys::fuzz_target!(|input: (Vec<&str>, u64)| {
    fuzz_with(&input.0, input.1);
});
