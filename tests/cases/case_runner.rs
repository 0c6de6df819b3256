#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::case_loader::{CaseFailure, CaseResult, TestCase, load_cases};

/// Run every case and collect mismatches
pub fn run_cases(cases: Vec<TestCase>) -> CaseResult {
    let mut result = CaseResult::default();

    for case in cases {
        match case {
            TestCase::Comment(_) => {}
            TestCase::Failure { input, error } => match dburl::parse(&input) {
                Ok(dsn) => result.failures.push(CaseFailure {
                    input,
                    field: "error",
                    expected: error,
                    actual: dsn.dsn().to_string(),
                }),
                Err(actual) if actual.to_string() == error => result.passed += 1,
                Err(actual) => result.failures.push(CaseFailure {
                    input,
                    field: "error",
                    expected: error,
                    actual: actual.to_string(),
                }),
            },
            TestCase::Success { input, driver, dsn } => {
                let parsed = match dburl::parse(&input) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        result.failures.push(CaseFailure {
                            input,
                            field: "parsing",
                            expected: "success".to_string(),
                            actual: e.to_string(),
                        });
                        continue;
                    }
                };

                if parsed.driver() != driver {
                    result.failures.push(CaseFailure {
                        input,
                        field: "driver",
                        expected: driver,
                        actual: parsed.driver().to_string(),
                    });
                } else if parsed.dsn() != dsn {
                    result.failures.push(CaseFailure {
                        input,
                        field: "dsn",
                        expected: dsn,
                        actual: parsed.dsn().to_string(),
                    });
                } else {
                    result.passed += 1;
                }
            }
        }
    }

    result
}

#[test]
fn test_dsn_cases() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    let result = run_cases(cases);
    assert!(
        result.failures.is_empty(),
        "{}\n{:#?}",
        result.summary(),
        result.failures
    );
}
