//! Policy evaluation result types

use serde::{Deserialize, Serialize};

/// Outcome of testing one clause against one observed value
///
/// `NotApplicable` means the clause could not be evaluated (the observed
/// value is absent). Consumers must treat it as "skip this rule for this
/// node", never as a violation: aggregation logic that counts failures
/// must not count `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    /// Observed value satisfies the clause
    Pass,

    /// Observed value violates the clause
    Fail,

    /// Clause cannot be evaluated against this node
    NotApplicable,
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TestStatus::Pass => "pass",
            TestStatus::Fail => "fail",
            TestStatus::NotApplicable => "not_applicable",
        };
        f.write_str(s)
    }
}
