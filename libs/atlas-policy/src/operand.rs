//! Operand variant set - comparison operators for clause evaluation
//!
//! Each parsed clause carries one operand selected by its leading token:
//! no token = Equal, `*` = Wildcard, `>` = GreaterThan, `<` = LessThan,
//! `!` = NotEqual. Operands decide whether an observed node attribute
//! satisfies the clause (`matches`) and how far a numeric attribute is
//! from compliance (`delta`).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::types::TestStatus;
use crate::value;

/// Wildcard sentinel: a clause value of `*` is satisfied by any present value
pub const ANY: &str = "*";

/// Comparison operator attached to a clause
///
/// The five variants form a fixed table; each is a pure, stateless
/// comparator safe for unrestricted concurrent use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// `*` - satisfied by any present value
    Wildcard,

    /// Implicit default (no token) - satisfied by an equal value
    Equal,

    /// `!` - satisfied by any non-equal value
    NotEqual,

    /// `>` - satisfied by a strictly greater numeric value
    GreaterThan,

    /// `<` - satisfied by a strictly smaller numeric value
    LessThan,
}

impl Operand {
    /// All variants, in token-lookup order
    ///
    /// Symbolic tokens come before Equal's empty token so the implicit
    /// default cannot shadow them.
    pub const ALL: [Operand; 5] = [
        Operand::Wildcard,
        Operand::NotEqual,
        Operand::GreaterThan,
        Operand::LessThan,
        Operand::Equal,
    ];

    /// Symbolic token selecting this operand in rule text
    pub const fn token(self) -> &'static str {
        match self {
            Operand::Wildcard => ANY,
            Operand::Equal => "",
            Operand::NotEqual => "!",
            Operand::GreaterThan => ">",
            Operand::LessThan => "<",
        }
    }

    /// Sort key for ordering candidate clauses, lower = more specific
    ///
    /// Ties (NotEqual / LessThan) keep original clause order under a
    /// stable sort.
    pub const fn priority(self) -> i32 {
        match self {
            Operand::Equal => 0,
            Operand::GreaterThan => 1,
            Operand::NotEqual => 2,
            Operand::LessThan => 2,
            Operand::Wildcard => i32::MAX,
        }
    }

    /// Look up the operand for an exact token; empty selects Equal
    ///
    /// Unknown tokens yield `None` - the clause parser owns the error
    /// policy for malformed rule text.
    pub fn for_token(token: &str) -> Option<Operand> {
        Operand::ALL.iter().copied().find(|op| op.token() == token)
    }

    /// Test an observed value against a clause value
    ///
    /// Total over well-formed input: every call yields Pass, Fail, or
    /// NotApplicable. The numeric comparison paths (GreaterThan /
    /// LessThan) surface a coercion failure as an error instead; whether
    /// that is fatal or skip-and-continue is the caller's decision.
    pub fn matches(self, rule_val: &Value, actual_val: &Value) -> Result<TestStatus> {
        match self {
            Operand::Wildcard => {
                if actual_val.is_null() {
                    Ok(TestStatus::NotApplicable)
                } else {
                    Ok(TestStatus::Pass)
                }
            },
            Operand::Equal => Ok(eq_matches(rule_val, actual_val)),
            Operand::NotEqual => {
                // Exact complement of Equal, including the both-absent case
                match eq_matches(rule_val, actual_val) {
                    TestStatus::Pass => Ok(TestStatus::Fail),
                    _ => Ok(TestStatus::Pass),
                }
            },
            Operand::GreaterThan => ordered_matches(rule_val, actual_val, Ordering::Greater),
            Operand::LessThan => ordered_matches(rule_val, actual_val, Ordering::Less),
        }
    }

    /// Numeric distance from compliance, `None` when not computable
    ///
    /// Both sides run through the shared count validation; a coercion
    /// failure on either side is absorbed into `None` rather than raised,
    /// so scoring logic can call this uniformly on non-numeric clause
    /// types. `None` is distinct from `Some(0)` (already compliant).
    pub fn delta(self, expected: &Value, actual: &Value) -> Option<i64> {
        let expected = match value::coerce_count(expected) {
            Ok(v) => v,
            Err(e) => {
                tracing::trace!("delta skipped, expected value: {}", e);
                return None;
            },
        };
        let actual = match value::coerce_count(actual) {
            Ok(v) => v,
            Err(e) => {
                tracing::trace!("delta skipped, actual value: {}", e);
                return None;
            },
        };
        Some(self.raw_delta(expected, actual))
    }

    /// Canonical textual form of a clause: token + expected value
    pub fn render_rule(self, expected_val: &Value) -> String {
        format!("{}{}", self.token(), value::value_text(expected_val))
    }

    /// Per-variant delta formula over already-coerced counts
    ///
    /// Equal and NotEqual share the signed-gap formula; GreaterThan's
    /// out-of-compliance case carries a +1 offset (minimum shift to
    /// strictly exceed) while LessThan's does not. Variants without a
    /// formula of their own fall back to 0.
    fn raw_delta(self, expected: i64, actual: i64) -> i64 {
        match self {
            Operand::Equal | Operand::NotEqual => expected - actual,
            Operand::GreaterThan => {
                if actual > expected {
                    0
                } else {
                    (expected + 1) - actual
                }
            },
            Operand::LessThan => {
                if actual < expected {
                    0
                } else {
                    expected - actual
                }
            },
            Operand::Wildcard => 0,
        }
    }
}

/// Shared base match: Pass iff the values are equal, including both absent
fn eq_matches(rule_val: &Value, actual_val: &Value) -> TestStatus {
    if rule_val == actual_val {
        TestStatus::Pass
    } else {
        TestStatus::Fail
    }
}

/// Strict-ordering match shared by GreaterThan and LessThan
///
/// Absent actual is NotApplicable. A floating-point *rule* value selects
/// the double comparison path, with the actual parsed generically to a
/// double regardless of its original kind; otherwise both sides coerce to
/// signed 64-bit integers.
fn ordered_matches(rule_val: &Value, actual_val: &Value, expect: Ordering) -> Result<TestStatus> {
    if actual_val.is_null() {
        return Ok(TestStatus::NotApplicable);
    }

    let ordering = if rule_is_float(rule_val) {
        let rule = value::parse_double(rule_val)?;
        let actual = value::parse_double(actual_val)?;
        actual.total_cmp(&rule)
    } else {
        let actual = value::as_long(actual_val)?;
        let rule = value::as_long(rule_val)?;
        actual.cmp(&rule)
    };

    if ordering == expect {
        Ok(TestStatus::Pass)
    } else {
        Ok(TestStatus::Fail)
    }
}

/// Whether the rule value's declared kind is floating-point
fn rule_is_float(rule_val: &Value) -> bool {
    matches!(rule_val, Value::Number(n) if n.is_f64())
}
