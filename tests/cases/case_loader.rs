#![allow(clippy::panic)]

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// Expected failure, compared by error message
    Failure { input: String, error: String },
    /// Expected driver and DSN
    Success {
        input: String,
        driver: String,
        dsn: String,
    },
    /// A section heading
    Comment(String),
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct CaseFailure {
    pub input: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!(
            "Passed: {}, Failed: {}",
            self.passed,
            self.failures.len()
        )
    }
}

pub fn load_cases() -> Vec<TestCase> {
    let data = include_str!("dsn_cases.json");
    serde_json::from_str(data).unwrap_or_else(|e| panic!("invalid dsn_cases.json: {e}"))
}
