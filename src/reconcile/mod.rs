//! Price reconciliation: report generation, operator prompts, and the
//! interactive/force update passes.

pub mod prompts;
pub mod report;
pub mod session;

pub use prompts::{Confirmation, RunMode};
pub use report::ReconciliationRecord;
pub use session::UpdateOutcome;
