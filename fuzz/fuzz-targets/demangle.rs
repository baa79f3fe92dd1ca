#![no_main]

use lang_demangle::{DemangleOutcome, Language};

fn fuzz_with(data: &str) {
    let mut demangled = String::new();

    for language in Language::ALL {
        if language.demangle_name(data, &mut demangled) != DemangleOutcome::Success {
            assert!(demangled.is_empty());
        }

        let _ = language.make_qualified_name(data, data);
    }
}

libfuzzer_sys::fuzz_target!(|data: &str| {
    fuzz_with(data);
});
