#![no_main]

use hypotest::config::TestConfig;
use hypotest::hypothesis::{run_test, TestKind};
use hypotest::input::{parse_inline, parse_matrix, InputOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and both tests must return errors, never panic
        let config = TestConfig::default();
        for matrix in [
            parse_matrix(input, &InputOptions::default()),
            parse_inline(input),
        ]
        .into_iter()
        .flatten()
        {
            let _ = run_test(TestKind::ChiSquared, &matrix, &config);
            let _ = run_test(TestKind::TTestIndependent, &matrix, &config);
        }
    }
});
