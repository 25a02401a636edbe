//! Runs known-answer suites through the cipher dispatcher.

use classicrypt_ciphers::process;

use super::error::{KatError, Result};
use super::model::{KatCase, KatSuite};

/// Run one case and compare with its expectation
pub fn run_case(case: &KatCase) -> Result<()> {
    let out = process(&case.input, &case.spec, case.mode);

    match (&case.expected, case.expected_error) {
        (Some(expected), None) => {
            if out.error.is_some() || &out.result != expected {
                return Err(KatError::Mismatch {
                    tc_id: case.tc_id,
                    expected: expected.clone(),
                    actual: out.error.unwrap_or(out.result),
                });
            }
            if let Some(expected) = case.trace_len {
                if out.trace.len() != expected {
                    return Err(KatError::TraceLength {
                        tc_id: case.tc_id,
                        expected,
                        actual: out.trace.len(),
                    });
                }
            }
            Ok(())
        }
        (None, Some(kind)) => {
            if out.error_kind != Some(kind) || !out.result.is_empty() || !out.trace.is_empty() {
                return Err(KatError::ErrorMismatch {
                    tc_id: case.tc_id,
                    expected: kind,
                    actual: out.error_kind,
                });
            }
            Ok(())
        }
        _ => Err(KatError::NoExpectation { tc_id: case.tc_id }),
    }
}

/// Run every case, reporting each failure and then the tally
pub fn run_suite(suite: &KatSuite) -> Result<usize> {
    let mut failed = 0;
    for case in &suite.tests {
        if let Err(e) = run_case(case) {
            failed += 1;
            eprintln!(
                "[{}] {} ({})",
                suite.suite_name,
                e,
                case.description.as_deref().unwrap_or("no description")
            );
        }
    }

    if failed > 0 {
        return Err(KatError::Suite {
            suite: suite.suite_name.clone(),
            failed,
            total: suite.tests.len(),
        });
    }
    Ok(suite.tests.len())
}
