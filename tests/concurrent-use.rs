use lang_demangle::{DemangleOutcome, Language};
use std::thread;
use test_utilities::{mangle_legacy, mangle_nested};

fn inputs() -> Vec<String> {
    let mut inputs = vec![
        String::new(),
        String::from("$"),
        String::from("_ZN3foo"),
        String::from("_ZN3foo3barEv"),
        String::from("$s4main3fooyyF"),
        String::from("_ZN3foo6$XX$ba17h0123456789abcdefE"),
        mangle_nested(["std", "rt", "lang_start"]),
    ];

    for i in 0..64_u64 {
        let name = format!("item{i}");
        let escaped = format!("Vec$LT$T{i}$GT$");

        inputs.push(mangle_legacy(["krate", name.as_str()], i));
        inputs.push(mangle_legacy(["krate", escaped.as_str(), "push"], u64::MAX - i));
    }

    inputs
}

fn run(inputs: &[String]) -> Vec<(Language, DemangleOutcome, String, String)> {
    let mut results = Vec::new();
    let mut demangled = String::new();

    for language in Language::ALL {
        for input in inputs {
            let outcome = language.demangle_name(input, &mut demangled);
            let qualified = language.qualify(["outer", input.as_str()]);

            results.push((language, outcome, demangled.clone(), qualified));
        }
    }

    results
}

#[test]
fn test_concurrent_calls_match_sequential_calls() {
    lang_demangle::initialize();

    let inputs = inputs();
    let expected = run(&inputs);

    thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| scope.spawn(|| run(&inputs)))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_threads_with_distinct_inputs() {
    let inputs = inputs();

    thread::scope(|scope| {
        let handles = inputs
            .chunks(16)
            .map(|chunk| scope.spawn(move || (chunk, run(chunk))))
            .collect::<Vec<_>>();

        for handle in handles {
            let (chunk, results) = handle.join().unwrap();

            assert_eq!(results, run(chunk));
        }
    });
}
