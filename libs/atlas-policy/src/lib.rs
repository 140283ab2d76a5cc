//! Atlas Policy - Cluster Policy Operand Core
//!
//! Comparison operators for the Atlas cluster policy engine:
//! - Operand variant set (wildcard, equal, not-equal, greater-than, less-than)
//! - Tri-state clause test result (pass / fail / not applicable)
//! - Compliance distance (`delta`) for remediation scoring
//! - Canonical rule rendering for diagnostics
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ token   ┌──────────────┐ status  ┌──────────────┐
//! │ Clause parser│────────▶│   Operand    │────────▶│  Evaluator   │
//! │  (external)  │         │ match/delta  │  delta  │  (external)  │
//! └──────────────┘         └──────────────┘────────▶│  remediation │
//!                                                   └──────────────┘
//! ```
//!
//! Every operation is pure and stateless; operands are `Copy` values safe
//! for unrestricted concurrent use across evaluation tasks.

mod error;
mod operand;
mod types;
mod value;

// Re-export public API
pub use error::{PolicyError, Result};
pub use operand::{Operand, ANY};
pub use types::TestStatus;
pub use value::coerce_count;
