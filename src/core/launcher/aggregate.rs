//! Reduction of per-item outcomes into a batch summary

use super::types::{BatchResult, LaunchOutcome};

/// Count outcomes by kind; the executor yields exactly one outcome per item.
///
/// A batch counts as successful as soon as one item launched.
pub fn aggregate(outcomes: Vec<LaunchOutcome>) -> BatchResult {
    let total = outcomes.len();
    let success_count = outcomes.iter().filter(|o| o.is_success()).count();
    let error_count = total - success_count;

    BatchResult {
        success: success_count > 0,
        total,
        success_count,
        error_count,
        results: outcomes,
    }
}
